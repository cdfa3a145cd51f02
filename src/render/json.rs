use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::result::Trending;

const INDENT: &[u8] = b"    ";

pub(super) fn render<W: Write>(trending: &Trending, out: &mut W) -> Result<()> {
    let mut serializer = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(INDENT));
    trending.serialize(&mut serializer)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_type::ContentType;
    use crate::result::{RepositoryRecord, TrendingRecord};

    #[test]
    fn test_pretty_output_keeps_order_and_nulls() {
        let mut t = Trending::new(ContentType::Repositories);
        t.insert(TrendingRecord::Repository(RepositoryRecord::new(
            1,
            "z/last-alphabetically".into(),
            None,
            Some("Rust".into()),
            Some("1,000".into()),
        )));
        t.insert(TrendingRecord::Repository(RepositoryRecord::new(
            2,
            "a/first".into(),
            Some("desc".into()),
            None,
            None,
        )));

        let mut buf = Vec::new();
        render(&t, &mut buf).expect("renders");
        let out = String::from_utf8(buf).expect("utf-8 output");

        let expected = r#"{
    "z/last-alphabetically": {
        "rank": 1,
        "description": null,
        "language": "Rust",
        "stars": "1,000",
        "url": "https://github.com/z/last-alphabetically"
    },
    "a/first": {
        "rank": 2,
        "description": "desc",
        "language": null,
        "stars": null,
        "url": "https://github.com/a/first"
    }
}
"#;
        assert_eq!(out, expected);
    }
}
