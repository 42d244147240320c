/// Source of the three values a parking check is made from.
pub trait FormInputs {
    fn license_plate(&self) -> &str;
    fn lot_name(&self) -> &str;
    fn user_type(&self) -> &str;
}

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub license_plate: String,
    pub lot_name: String,
    pub user_type: String,
}

impl FormInputs for FormFields {
    fn license_plate(&self) -> &str {
        &self.license_plate
    }

    fn lot_name(&self) -> &str {
        &self.lot_name
    }

    fn user_type(&self) -> &str {
        &self.user_type
    }
}
