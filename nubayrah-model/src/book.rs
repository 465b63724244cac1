use crate::ids::BookId;

/// A single catalogue entry as returned by the server.
///
/// The client never mutates these; only the server assigns and changes
/// fields. `title`, `author` and `pub_date` are what the listing renders, the
/// remaining metadata is carried through for presentation layers that want it.
///
/// The server emits the metadata block with capitalised keys (`Title`,
/// `PubDate`, ...) while older payloads use camel case, so both spellings are
/// accepted on input. Output always uses camel case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BookRecord {
    #[cfg_attr(feature = "serde", serde(alias = "ID"))]
    pub id: BookId,
    #[cfg_attr(feature = "serde", serde(default, alias = "Title"))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Author"))]
    pub author: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "PubDate"))]
    pub pub_date: String,

    #[cfg_attr(feature = "serde", serde(default, alias = "TitleSort"))]
    pub title_sort: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "AuthorSort"))]
    pub author_sort: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Language"))]
    pub language: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Series"))]
    pub series: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "SeriesNum"))]
    pub series_num: f64,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "Subjects",
            deserialize_with = "null_as_default"
        )
    )]
    pub subjects: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, alias = "Isbn"))]
    pub isbn: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Publisher"))]
    pub publisher: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Rights"))]
    pub rights: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Description"))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "Uid"))]
    pub uid: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "FilePath"))]
    pub file_path: String,
}

impl BookRecord {
    /// Build a record carrying only the fields the listing renders.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        pub_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            pub_date: pub_date.into(),
            title_sort: String::new(),
            author_sort: String::new(),
            language: String::new(),
            series: String::new(),
            series_num: 0.0,
            subjects: Vec::new(),
            isbn: String::new(),
            publisher: String::new(),
            rights: String::new(),
            description: String::new(),
            uid: String::new(),
            file_path: String::new(),
        }
    }

    /// Publication date parsed from the server's ISO 8601 string.
    ///
    /// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
    #[cfg(feature = "chrono")]
    pub fn published_on(&self) -> Option<chrono::NaiveDate> {
        let raw = self.pub_date.trim();
        if raw.is_empty() {
            return None;
        }
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_listing_entry() {
        let json = r#"{
            "id": "b-1",
            "title": "Dune",
            "author": "Frank Herbert",
            "pubDate": "1965-08-01"
        }"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "b-1");
        assert_eq!(record.title, "Dune");
        assert_eq!(record.author, "Frank Herbert");
        assert_eq!(record.pub_date, "1965-08-01");
        assert!(record.subjects.is_empty());
    }

    #[test]
    fn decodes_server_metadata_keys() {
        let json = r#"{
            "id": "9a3c",
            "Title": "Emma",
            "TitleSort": "Emma",
            "Author": "Jane Austen",
            "AuthorSort": "Austen, Jane",
            "Language": "en",
            "Series": "",
            "SeriesNum": 0,
            "Subjects": null,
            "Isbn": "",
            "Publisher": "John Murray",
            "PubDate": "1815-12-23T00:00:00Z",
            "Rights": "",
            "Contributors": [{}],
            "Description": "",
            "Uid": "urn:uuid:1",
            "filePath": "/library/emma.epub"
        }"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Emma");
        assert_eq!(record.author_sort, "Austen, Jane");
        assert_eq!(record.pub_date, "1815-12-23T00:00:00Z");
        assert!(record.subjects.is_empty());
        assert_eq!(record.file_path, "/library/emma.epub");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn publication_date_parses_both_shapes() {
        let id = BookId::new("x").unwrap();
        let full =
            BookRecord::new(id.clone(), "t", "a", "1815-12-23T00:00:00Z");
        let bare = BookRecord::new(id.clone(), "t", "a", "1815-12-23");
        let junk = BookRecord::new(id, "t", "a", "winter");

        let expected = chrono::NaiveDate::from_ymd_opt(1815, 12, 23);
        assert_eq!(full.published_on(), expected);
        assert_eq!(bare.published_on(), expected);
        assert_eq!(junk.published_on(), None);
    }
}
