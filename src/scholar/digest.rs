//! Decoding of the authenticated API response into papers.

use super::{error::ScholarError, paper::*};
use serde_json::{Map, Value};

/// Decode the response body into papers, in digest order.
///
/// Entries which aren't objects, or which lack a title, are skipped. A body
/// which isn't an object with a digest array is a [ScholarError::ResponseShape].
/// Only `digest_df` is read; the rest of the response isn't stable enough to
/// type.
pub fn decode_digest(body: &str) -> Result<Vec<Paper>, ScholarError> {
    let mut res: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| ScholarError::ResponseShape(format!("Undecodable digest response: {}", e)))?;

    let entries = match res.remove("digest_df") {
        Some(Value::Array(xs)) => xs,
        Some(_) => {
            return Err(ScholarError::ResponseShape(
                "`digest_df` is not an array".into(),
            ))
        }
        None => {
            return Err(ScholarError::ResponseShape(
                "No `digest_df` field found".into(),
            ))
        }
    };

    let papers = entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|x| serde_json::from_value::<RawPaper>(x).ok())
        .filter_map(Paper::from_raw)
        .collect();

    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titles(papers: &[Paper]) -> Vec<&str> {
        papers.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_preserves_order() {
        let body = json!({
            "digest_df": [{ "title": "A" }, { "title": "B" }],
            "current_digest_date": "2024-05-01"
        })
        .to_string();

        assert_eq!(
            decode_digest(&body).unwrap(),
            vec![
                Paper {
                    title: "A".into(),
                    ..Default::default()
                },
                Paper {
                    title: "B".into(),
                    ..Default::default()
                },
            ]
        );
    }

    #[test]
    fn test_skips_untitled_and_non_objects() {
        let body = json!({
            "digest_df": [
                { "title": "Kept" },
                { "authors": "No Title" },
                "just a string",
                42,
                null,
                [{ "title": "Nested" }],
                { "title": "" },
                { "title": "Also kept", "abstract": "Hi" }
            ]
        })
        .to_string();

        let papers = decode_digest(&body).unwrap();
        assert_eq!(titles(&papers), vec!["Kept", "Also kept"]);
        assert_eq!(papers[1].abstract_text, "Hi");
    }

    #[test]
    fn test_empty_digest() {
        let papers = decode_digest(r#"{"digest_df": []}"#).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_unexpected_shapes() {
        for body in [
            r#"{"papers": []}"#,
            r#"{"digest_df": null}"#,
            r#"{"digest_df": {"title": "A"}}"#,
            r#"[[{"title": "A"}]]"#,
            r#"[{"digest_df": [{"title": "A"}]}]"#,
            "<html>Please log in</html>",
        ] {
            assert!(
                matches!(decode_digest(body), Err(ScholarError::ResponseShape(_))),
                "expected shape error for {}",
                body
            );
        }
    }
}
