use super::{Violation, utils};
use crate::policy::FormPolicy;
use formguard_types::ids;

/// Lower-cased extension of a selected file name.
///
/// Any directory part is ignored. A name without a dot, or ending in one,
/// has no extension.
pub fn extension(file_name: &str) -> Option<String> {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

pub fn run(value: &str, policy: &FormPolicy) -> Result<(), Violation> {
    match extension(value) {
        Some(ext) if policy.allows_extension(&ext) => Ok(()),
        _ => Err(Violation::new(
            ids::CODE_EXTENSION_NOT_ALLOWED,
            format!(
                "Resume must be one of: {}",
                utils::join_extensions(&policy.allowed_extensions)
            ),
            "Upload a file with one of the allowed extensions.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_case_insensitive_and_uses_last_dot() {
        assert_eq!(extension("cv.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension("cv.final.Docx").as_deref(), Some("docx"));
        assert_eq!(extension("C:\\Users\\ada\\cv.pdf").as_deref(), Some("pdf"));
        assert_eq!(extension("docs.v2/cv").as_deref(), None);
    }

    #[test]
    fn names_without_extension_are_rejected() {
        assert_eq!(extension("pdf"), None);
        assert_eq!(extension("cv."), None);
        let policy = FormPolicy::default();
        assert!(run("pdf", &policy).is_err());
    }

    #[test]
    fn message_lists_configured_extensions() {
        let policy = FormPolicy {
            allowed_extensions: vec!["pdf".to_string(), "odt".to_string()],
            ..FormPolicy::default()
        };
        let violation = run("cv.docx", &policy).unwrap_err();
        assert_eq!(violation.message, "Resume must be one of: pdf, odt");
        assert!(run("cv.odt", &policy).is_ok());
    }
}
