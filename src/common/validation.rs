use rust_decimal::Decimal;
use validator::ValidationError;

// ---
// Validações customizadas compartilhadas pelos payloads
// ---

// String obrigatória não pode ser vazia nem conter só espaços.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("O campo não pode ser vazio.".into());
        return Err(err);
    }
    Ok(())
}

// Preço: estritamente maior que zero.
pub fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("exclusive_min".into(), &0.0);
        err.message = Some("O valor deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
        assert!(validate_not_blank("Tech Central").is_ok());
        // espaços nas bordas não invalidam um valor real
        assert!(validate_not_blank("  ok  ").is_ok());
    }

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert!(validate_positive(&Decimal::ZERO).is_err());
        assert!(validate_positive(&Decimal::new(-100, 2)).is_err());
        assert!(validate_positive(&Decimal::new(1, 2)).is_ok());
    }
}
