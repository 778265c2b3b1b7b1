//! # Cast lists
//!
//! A cast list is a delimited text file with a header line followed by one record per
//! role:
//!
//! ```text
//! "MOVIE","ACTOR","CHARACTER_NAME","TYPE","BILLING","GENDER"
//! "Tyler Perry's Boo! A Madea Halloween","Tyler Perry","Madea","Leading","1","Male"
//! ```
//!
//! Only the first two fields (collection, participant) and the subgroup field after the
//! ignored ones are used. Fields may be wrapped in double quotes, in which case the
//! delimiter may appear inside them; a doubled quote inside a quoted field stands for a
//! literal quote (`"The ""Best"" Movie"` reads as `The "Best" Movie`).

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use super::*;

/// A single role: `participant` appears in `collection`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastRecord {
    pub collection: String,
    pub participant: String,
    /// *true* if the subgroup field matched the configured subgroup label
    pub is_subgroup: bool,
}

/// Settings for reading cast lists
#[derive(Debug, Clone)]
pub struct CastReader {
    /// Field separator
    delimiter: char,
    /// Quote character wrapping fields
    quote: char,
    /// Value of the subgroup field that marks a subgroup member (compared exactly)
    subgroup_label: String,
    /// Number of fields between the participant and the subgroup field
    ignored_fields: usize,
    /// Skip the first line
    skip_header: bool,
}

impl Default for CastReader {
    /// Default to the six-field `MOVIE, ACTOR, CHARACTER_NAME, TYPE, BILLING, GENDER` layout
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            subgroup_label: "Female".to_string(),
            ignored_fields: 3,
            skip_header: true,
        }
    }
}

impl CastReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the field separator
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Updates the quote character
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Updates the label that marks subgroup members
    pub fn subgroup_label<S: Into<String>>(mut self, label: S) -> Self {
        self.subgroup_label = label.into();
        self
    }

    /// Updates the number of skipped fields before the subgroup field
    pub fn ignored_fields(mut self, n: usize) -> Self {
        self.ignored_fields = n;
        self
    }

    /// Whether the first line is a header
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Returns an iterator over the records of `reader`
    pub fn records<R: BufRead>(&self, reader: R) -> CastRecords<'_, R> {
        CastRecords {
            settings: self,
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Reads all records or fails on the first malformed one
    pub fn try_read_records<R: BufRead>(&self, reader: R) -> Result<Vec<CastRecord>> {
        self.records(reader).collect()
    }

    /// Reads all records of a file or fails on the first malformed one
    pub fn try_read_records_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<CastRecord>> {
        self.try_read_records(BufReader::new(File::open(path)?))
    }

    /// Splits a line at every delimiter outside quotes and strips the quotes
    fn split_fields(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut quoted = false;

        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if c == self.quote {
                if quoted && chars.peek() == Some(&self.quote) {
                    field.push(c);
                    chars.next();
                } else {
                    quoted = !quoted;
                }
            } else if c == self.delimiter && !quoted {
                fields.push(std::mem::take(&mut field));
            } else {
                field.push(c);
            }
        }
        fields.push(field);
        fields
    }

    fn parse_record(&self, line: &str, line_no: usize) -> Result<CastRecord> {
        let fields = self.split_fields(line);
        let needed = self.ignored_fields + 3;
        raise_parse_error_unless!(
            fields.len() >= needed,
            line_no,
            format!("Expected at least {needed} fields, found {}", fields.len())
        );

        let mut fields = fields.into_iter();
        let collection = fields.next().unwrap_or_default();
        let participant = fields.next().unwrap_or_default();
        let subgroup = fields.nth(self.ignored_fields).unwrap_or_default();

        raise_parse_error_unless!(!collection.is_empty(), line_no, "Empty collection field");
        raise_parse_error_unless!(!participant.is_empty(), line_no, "Empty participant field");

        Ok(CastRecord {
            collection,
            participant,
            is_subgroup: subgroup == self.subgroup_label,
        })
    }
}

/// Iterator over the records of a cast list; yields an error for malformed lines
pub struct CastRecords<'a, R> {
    settings: &'a CastReader,
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Iterator for CastRecords<'_, R> {
    type Item = Result<CastRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            self.line_no += 1;

            if self.line_no == 1 && self.settings.skip_header {
                continue;
            }

            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            return Some(self.settings.parse_record(line, self.line_no));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\"MOVIE\",\"ACTOR\",\"CHARACTER_NAME\",\"TYPE\",\"BILLING\",\"GENDER\"\n\
        \"Boo! A Madea Halloween\",\"Tyler Perry\",\"Madea\",\"Leading\",\"1\",\"Male\"\r\n\
        \"Boo! A Madea Halloween\",\"Cassi Davis\",\"Aunt Bam\",\"Supporting\",\"2\",\"Female\"\n\
        \n\
        \"Hello, My Name Is Doris\",\"Sally Field\",\"Doris\",\"Leading\",\"1\",\"Female\"\n";

    #[test]
    fn reads_quoted_records() {
        let records = CastReader::new().try_read_records(SMALL.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(
            records[0],
            CastRecord {
                collection: "Boo! A Madea Halloween".into(),
                participant: "Tyler Perry".into(),
                is_subgroup: false,
            }
        );
        assert!(records[1].is_subgroup);
        assert_eq!(records[2].collection, "Hello, My Name Is Doris");
        assert_eq!(records[2].participant, "Sally Field");
    }

    #[test]
    fn custom_layout() {
        let input = "m1;a1;F\nm1;a2;M\n";
        let reader = CastReader::new()
            .delimiter(';')
            .ignored_fields(0)
            .subgroup_label("F")
            .skip_header(false);

        let records = reader.try_read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_subgroup);
        assert!(!records[1].is_subgroup);
    }

    #[test]
    fn doubled_quotes_are_literal() {
        let input = "\"The \"\"Best\"\" Movie\",\"A1\",\"\",\"t\",\"1\",\"Female\"\n";
        let records = CastReader::new()
            .skip_header(false)
            .try_read_records(input.as_bytes())
            .unwrap();

        assert_eq!(records[0].collection, "The \"Best\" Movie");
        assert_eq!(records[0].participant, "A1");
        assert!(records[0].is_subgroup);
    }

    #[test]
    fn custom_quote_character() {
        let input = "'Hello, My Name Is Doris'|'Sally Field'|'It''s me'|F\n";
        let reader = CastReader::new()
            .delimiter('|')
            .quote('\'')
            .ignored_fields(1)
            .subgroup_label("F")
            .skip_header(false);

        let records = reader.try_read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].collection, "Hello, My Name Is Doris");
        assert_eq!(records[0].participant, "Sally Field");
        assert!(records[0].is_subgroup);
    }

    #[test]
    fn short_record_reports_line() {
        let input = "header\n\"m\",\"a\",\"x\",\"y\",\"z\",\"Female\"\n\"m\",\"a\"\n";
        let err = CastReader::new()
            .try_read_records(input.as_bytes())
            .unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CastReader::new()
            .try_read_records_file(dir.path().join("nope.txt"))
            .unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
