//! Dialect detection by fixed-priority marker tiers.
//!
//! Tiers are tested top to bottom and the first tier with any matching
//! marker wins. There is no scoring: a snippet holding both a C# marker and
//! a SQL statement is C#.

use crate::types::Dialect;
use tracing::trace;

/// Marker tiers in priority order. Markers are lowercase; the snippet is
/// lowercased before testing.
const TIERS: &[(Dialect, &[&str])] = &[
    (
        Dialect::CSharp,
        &["using ", "namespace", "public class", "void"],
    ),
    (Dialect::VbNet, &["imports ", "module", "sub", "end sub"]),
    (
        Dialect::Sql,
        &["select ", "insert ", "update ", "create table"],
    ),
];

/// Classifies a snippet.
///
/// Case-insensitive substring tests. Blank input and input matching no tier
/// is [`Dialect::Unknown`].
#[must_use]
pub fn detect(text: &str) -> Dialect {
    if text.trim().is_empty() {
        return Dialect::Unknown;
    }

    let lowered = text.to_lowercase();
    for (dialect, markers) in TIERS {
        if let Some(marker) = markers.iter().find(|m| lowered.contains(*m)) {
            trace!(%dialect, marker, "dialect marker matched");
            return *dialect;
        }
    }

    Dialect::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_unknown() {
        assert_eq!(detect(""), Dialect::Unknown);
        assert_eq!(detect("  \n\t "), Dialect::Unknown);
    }

    #[test]
    fn detects_csharp_markers() {
        assert_eq!(detect("using System;"), Dialect::CSharp);
        assert_eq!(detect("public class Foo {}"), Dialect::CSharp);
        assert_eq!(detect("static VOID Main() {}"), Dialect::CSharp);
    }

    #[test]
    fn detects_vbnet_markers() {
        assert_eq!(detect("Imports System.IO"), Dialect::VbNet);
        assert_eq!(detect("Sub Main()\nEnd Sub"), Dialect::VbNet);
        assert_eq!(detect("Module Program"), Dialect::VbNet);
    }

    #[test]
    fn detects_sql_markers() {
        assert_eq!(detect("select * from Orders"), Dialect::Sql);
        assert_eq!(detect("INSERT INTO t VALUES (1)"), Dialect::Sql);
        assert_eq!(detect("CREATE TABLE t (id int)"), Dialect::Sql);
    }

    #[test]
    fn csharp_tier_wins_over_sql_tier() {
        let code = "namespace Data;\nvar q = \"SELECT * FROM Orders\";";
        assert_eq!(detect(code), Dialect::CSharp);
    }

    #[test]
    fn vbnet_tier_wins_over_sql_tier() {
        assert_eq!(detect("Sub Load()\nSELECT id FROM t"), Dialect::VbNet);
    }

    #[test]
    fn unmatched_text_is_unknown() {
        assert_eq!(detect("print('hello')"), Dialect::Unknown);
    }
}
