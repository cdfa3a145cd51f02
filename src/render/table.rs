use std::io::Write;

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table;

use crate::content_type::ContentType;
use crate::error::Result;
use crate::result::{Trending, TrendingRecord};

const REPOSITORY_HEADERS: [&str; 5] = ["Rank", "Repository", "URL", "Language", "Stars"];
const DEVELOPER_HEADERS: [&str; 5] = ["Rank", "User", "User ID", "URL", "Repository"];

/// Bordered, left-aligned table of the records in rank order.
pub(super) fn render<W: Write>(trending: &Trending, out: &mut W) -> Result<()> {
    let headers = match trending.content_type() {
        ContentType::Repositories => REPOSITORY_HEADERS,
        ContentType::Developers => DEVELOPER_HEADERS,
    };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED).set_header(headers);

    for record in trending {
        match record {
            TrendingRecord::Repository(r) => table.add_row([
                r.rank.to_string(),
                r.full_name.clone(),
                r.url.clone(),
                r.language.clone().unwrap_or_default(),
                r.stars.clone().unwrap_or_default(),
            ]),
            TrendingRecord::Developer(d) => table.add_row([
                d.rank.to_string(),
                d.name.clone(),
                d.user_id.clone(),
                d.url.clone(),
                d.repository.clone().unwrap_or_default(),
            ]),
        };
    }

    writeln!(out, "{table}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{DeveloperRecord, RepositoryRecord};

    fn rendered(trending: &Trending) -> String {
        let mut buf = Vec::new();
        render(trending, &mut buf).expect("renders");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn test_repository_columns() {
        let mut t = Trending::new(ContentType::Repositories);
        t.insert(TrendingRecord::Repository(RepositoryRecord::new(
            1,
            "a/b".into(),
            Some("ignored in table".into()),
            None,
            Some("1,024".into()),
        )));

        let out = rendered(&t);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "| Rank | Repository | URL                    | Language | Stars |"
        );
        assert_eq!(
            lines[3],
            "| 1    | a/b        | https://github.com/a/b |          | 1,024 |"
        );
        assert!(!out.contains("ignored in table"));
    }

    #[test]
    fn test_developer_columns() {
        let mut t = Trending::new(ContentType::Developers);
        t.insert(TrendingRecord::Developer(DeveloperRecord::new(
            1,
            "Jane".into(),
            "jd".into(),
            Some("widgets".into()),
            None,
        )));

        let out = rendered(&t);

        assert!(out.contains("| Rank | User | User ID | URL                   | Repository |"));
        assert!(out.contains("| 1    | Jane | jd      | https://github.com/jd | widgets    |"));
    }

    #[test]
    fn test_rows_follow_rank_order() {
        let mut t = Trending::new(ContentType::Repositories);
        for (rank, name) in [(1, "z/last"), (2, "a/first")] {
            t.insert(TrendingRecord::Repository(RepositoryRecord::new(
                rank,
                name.into(),
                None,
                None,
                None,
            )));
        }

        let out = rendered(&t);
        let z = out.find("z/last").expect("first row");
        let a = out.find("a/first").expect("second row");
        assert!(z < a);
        assert!(out.ends_with("+\n"));
    }
}
