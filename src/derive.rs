//! Pure derivations over a snapshot.
//!
//! These replace the host form's change callbacks: the host calls them
//! explicitly when a source field changes and gets a new value back.

use crate::snapshot::{FormSnapshot, StarterCredentials};
use std::fmt;

/// The Microsoft 365 sign-in address shown on the credentials page.
///
/// A pre-composed address containing `@` is used as is. Otherwise the
/// address is `{base}@{domain}`, with `default_domain` standing in for a
/// blank domain. A blank base yields an empty string.
pub fn m365_email(credentials: &StarterCredentials, default_domain: &str) -> String {
    let existing = credentials.m365_username.trim();
    if existing.contains('@') {
        return existing.to_string();
    }

    let base = credentials.m365_user_base.trim();
    if base.is_empty() {
        return String::new();
    }
    let domain = match credentials.m365_domain.trim() {
        "" => default_domain.trim(),
        d => d,
    };
    format!("{base}@{domain}")
}

fn is_filename_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ' ')
}

/// Keeps word characters, dashes, dots and spaces, collapses runs of
/// whitespace and trims. May return an empty string.
fn strip_filename(s: &str) -> String {
    let kept: String = s.trim().chars().filter(|&c| is_filename_char(c)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A file-system safe rendition of `s`; `"export"` if nothing survives.
pub fn safe_filename(s: &str) -> String {
    let stripped = strip_filename(s);
    if stripped.is_empty() {
        "export".to_string()
    } else {
        stripped
    }
}

/// The first non-blank asset number in slot order.
pub fn first_asset_number(snapshot: &FormSnapshot) -> Option<String> {
    snapshot
        .issued
        .iter()
        .map(|item| item.asset.trim())
        .find(|asset| !asset.is_empty())
        .map(str::to_string)
}

/// `"{name} - {asset}.pdf"`, `"{name}.pdf"` without an asset number, and
/// `"export.pdf"` when the name is blank too.
pub fn export_filename(snapshot: &FormSnapshot) -> String {
    let name = safe_filename(&snapshot.name);
    let asset = first_asset_number(snapshot)
        .map(|a| strip_filename(&a))
        .filter(|a| !a.is_empty());
    match asset {
        Some(asset) => format!("{name} - {asset}.pdf"),
        None => format!("{name}.pdf"),
    }
}

/// Everything that follows from the person's full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDerivation {
    pub full_name: String,
    pub receiver_name: String,
    pub starter_full_name: String,
    /// Lowercase, words joined by `.`, e.g. `jack.smith`.
    pub username_base: String,
}

impl NameDerivation {
    pub fn from_full_name(name: &str) -> Self {
        let full_name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        let username_base = full_name
            .to_lowercase()
            .split(' ')
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-'))
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        Self {
            receiver_name: full_name.clone(),
            starter_full_name: full_name.clone(),
            full_name,
            username_base,
        }
    }
}

impl FormSnapshot {
    /// A copy of this snapshot with `name` and every field derived from it.
    pub fn with_name(&self, name: &str) -> FormSnapshot {
        let derived = NameDerivation::from_full_name(name);
        let mut next = self.clone();
        next.name = derived.full_name;
        next.issue_signoff.receiver_name = derived.receiver_name;
        next.credentials.full_name = derived.starter_full_name;
        next.credentials.laptop_username = derived.username_base.clone();
        next.credentials.m365_user_base = derived.username_base;
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub complete: bool,
}

/// Presence checks shown beside the form. Informational only; an
/// incomplete checklist never blocks generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn for_snapshot(snapshot: &FormSnapshot) -> Self {
        let present = |s: &str| !s.trim().is_empty();
        let items = vec![
            ("NAME", present(&snapshot.name)),
            ("DATE", present(&snapshot.date)),
            ("WORK LOCATION", present(&snapshot.work_location)),
            (
                "EQUIPMENT",
                snapshot.issued.iter().any(|i| present(&i.description)),
            ),
            ("ISSUER NAME", present(&snapshot.issue_signoff.issuer_name)),
            ("RECEIVER NAME", present(&snapshot.issue_signoff.receiver_name)),
            ("DATE OF RETURN", present(&snapshot.return_date)),
        ]
        .into_iter()
        .map(|(label, complete)| ChecklistItem { label, complete })
        .collect();
        Self { items }
    }

    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|i| i.complete)
    }

    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().filter(|i| !i.complete).map(|i| i.label)
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            let mark = if item.complete { "[x]" } else { "[ ]" };
            writeln!(f, "{} {}", mark, item.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(username: &str, base: &str, domain: &str) -> StarterCredentials {
        StarterCredentials {
            m365_username: username.into(),
            m365_user_base: base.into(),
            m365_domain: domain.into(),
            ..Default::default()
        }
    }

    #[test]
    fn m365_email_is_composed_from_base_and_domain() {
        let c = credentials("", "jack.smith", "statom.co.uk");
        assert_eq!(m365_email(&c, "statom.co.uk"), "jack.smith@statom.co.uk");
    }

    #[test]
    fn m365_email_passes_existing_address_through() {
        let c = credentials("x@y.com", "jack.smith", "demoforce.co.uk");
        assert_eq!(m365_email(&c, "statom.co.uk"), "x@y.com");
    }

    #[test]
    fn m365_email_is_empty_without_base() {
        let c = credentials("not-an-address", "  ", "statom.co.uk");
        assert_eq!(m365_email(&c, "statom.co.uk"), "");
    }

    #[test]
    fn m365_email_uses_default_domain() {
        let c = credentials("", "jack.smith", "");
        assert_eq!(m365_email(&c, "statom.co.uk"), "jack.smith@statom.co.uk");
    }

    #[test]
    fn safe_filename_strips_and_collapses() {
        assert_eq!(safe_filename("  Jack   Smith / HR* "), "Jack Smith HR");
        assert_eq!(safe_filename("a\tb"), "ab");
        assert_eq!(safe_filename("José_Núñez-2.0"), "José_Núñez-2.0");
        assert_eq!(safe_filename("***"), "export");
        assert_eq!(safe_filename(""), "export");
    }

    #[test]
    fn sanitized_names_only_contain_allowed_characters() {
        for input in ["a<b>c", "x\ny  z", "../../etc/passwd", "名前 テスト!"] {
            let out = safe_filename(input);
            assert!(out.chars().all(is_filename_char), "{out:?}");
            assert!(!out.contains("  "));
        }
    }

    #[test]
    fn filename_uses_first_non_blank_asset() {
        let mut snap = FormSnapshot {
            name: "Jack Smith".into(),
            ..Default::default()
        };
        snap.issued[1].asset = "A-99".into();
        snap.issued[4].asset = "A-100".into();
        assert_eq!(first_asset_number(&snap).as_deref(), Some("A-99"));
        assert_eq!(export_filename(&snap), "Jack Smith - A-99.pdf");
    }

    #[test]
    fn filename_without_asset_or_name() {
        let mut snap = FormSnapshot {
            name: "Jack Smith".into(),
            ..Default::default()
        };
        assert_eq!(export_filename(&snap), "Jack Smith.pdf");
        snap.name = "   ".into();
        assert_eq!(export_filename(&snap), "export.pdf");
    }

    #[test]
    fn filename_ignores_asset_that_sanitizes_to_nothing() {
        let mut snap = FormSnapshot {
            name: "Jack".into(),
            ..Default::default()
        };
        snap.issued[0].asset = "#/#".into();
        assert_eq!(export_filename(&snap), "Jack.pdf");
    }

    #[test]
    fn name_derivation_builds_username_base() {
        let d = NameDerivation::from_full_name("  Jack   O'Neil-Smith ");
        assert_eq!(d.full_name, "Jack O'Neil-Smith");
        assert_eq!(d.receiver_name, "Jack O'Neil-Smith");
        assert_eq!(d.username_base, "jack.oneil-smith");
    }

    #[test]
    fn with_name_applies_all_derived_fields() {
        let base = FormSnapshot::default();
        let next = base.with_name("Dalif Toro");
        assert_eq!(next.name, "Dalif Toro");
        assert_eq!(next.issue_signoff.receiver_name, "Dalif Toro");
        assert_eq!(next.credentials.full_name, "Dalif Toro");
        assert_eq!(next.credentials.m365_user_base, "dalif.toro");
        assert_eq!(next.credentials.laptop_username, "dalif.toro");
        // the source snapshot is untouched
        assert_eq!(base, FormSnapshot::default());
    }

    #[test]
    fn checklist_reports_missing_items() {
        let mut snap = FormSnapshot {
            name: "Jack".into(),
            date: "2024-01-02".into(),
            ..Default::default()
        };
        snap.issued[3].description = "Laptop".into();
        let checklist = Checklist::for_snapshot(&snap);
        assert!(!checklist.is_complete());
        let missing: Vec<_> = checklist.missing().collect();
        assert_eq!(
            missing,
            vec!["WORK LOCATION", "ISSUER NAME", "RECEIVER NAME", "DATE OF RETURN"]
        );
        assert!(checklist.to_string().starts_with("[x] NAME\n"));
    }
}
