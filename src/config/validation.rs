use crate::config::ConvertOptions;
use crate::utils::error::ConvertError;

/// Validate conversion options
pub fn validate_options(options: &ConvertOptions) -> Result<(), ConvertError> {
    validate_toc_depth(options)?;
    validate_plantuml_markers(options)?;
    Ok(())
}

fn validate_toc_depth(options: &ConvertOptions) -> Result<(), ConvertError> {
    if options.toc_depth > 6 {
        return Err(ConvertError::Config(format!(
            "tocDepth must be between 1 and 6, got {}", options.toc_depth
        )));
    }
    Ok(())
}

fn validate_plantuml_markers(options: &ConvertOptions) -> Result<(), ConvertError> {
    if options.plantuml_open_marker.trim().is_empty()
        || options.plantuml_close_marker.trim().is_empty()
    {
        return Err(ConvertError::Config(
            "PlantUML open and close markers must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_options(&ConvertOptions::default()).is_ok());
    }

    #[test]
    fn test_rejects_deep_toc() {
        let mut options = ConvertOptions::default();
        options.toc_depth = 7;
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn test_rejects_blank_marker() {
        let mut options = ConvertOptions::default();
        options.plantuml_close_marker = "  ".to_string();
        assert!(validate_options(&options).is_err());
    }
}
