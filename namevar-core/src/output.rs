//! Streaming output helpers (made by FontLab https://www.fontlab.com/)

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::variants::VariantSet;

/// One candidate and whether the canonical name accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateVerdict {
    pub candidate: String,
    pub matched: bool,
}

/// A canonical name alongside its full variant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantReport {
    pub name: String,
    pub variants: VariantSet,
}

/// Write any serializable value as prettified JSON.
pub fn write_json_pretty<T: Serialize + ?Sized>(value: &T, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write items as newline-delimited JSON (NDJSON).
pub fn write_ndjson<'a, T, I>(items: I, mut w: impl Write) -> Result<()>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for item in items {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndjson_writes_one_line_per_verdict() {
        let verdicts = vec![
            CandidateVerdict {
                candidate: "M. Sinha".to_string(),
                matched: true,
            },
            CandidateVerdict {
                candidate: "Someone Else".to_string(),
                matched: false,
            },
        ];
        let mut buf = Vec::new();

        write_ndjson(&verdicts, &mut buf).expect("write ndjson");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: CandidateVerdict = serde_json::from_str(lines[1]).expect("parse");
        assert_eq!(parsed.candidate, "Someone Else");
        assert!(!parsed.matched);
    }
}
