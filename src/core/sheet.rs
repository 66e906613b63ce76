use crate::core::{ConfigProvider, Result, SheetSource, Technician};
use crate::utils::error::DirectoryError;
use reqwest::Client;

/// Fetches the published sheet and turns it into technician records.
/// One best-effort GET per call, no retry and no caching.
pub struct SheetClient {
    sheet_url: String,
    client: Client,
}

impl SheetClient {
    pub fn new(sheet_url: String) -> Self {
        Self {
            sheet_url,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.sheet_url().to_string())
    }
}

#[async_trait::async_trait]
impl SheetSource for SheetClient {
    async fn fetch_records(&self) -> Result<Vec<Technician>> {
        tracing::debug!("Fetching published sheet from: {}", self.sheet_url);
        let response = self.client.get(&self.sheet_url).send().await?;

        tracing::debug!("Sheet response status: {}", response.status());
        if !response.status().is_success() {
            return Err(DirectoryError::UpstreamStatusError {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(parse_records(&body))
    }
}

/// Split a published-CSV body into technician records.
///
/// The first line is the header and is dropped. Remaining lines are split
/// on bare newlines and commas with no quoting support, so a field value
/// containing a literal comma shifts the columns of that row. The source
/// sheet is maintained with that restriction in mind. Blank lines still
/// produce a record with every field empty.
pub fn parse_records(body: &str) -> Vec<Technician> {
    body.split('\n')
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            Technician {
                name: column(&fields, 0),
                phone: column(&fields, 1),
                address: column(&fields, 2),
                specialization: column(&fields, 3),
                link: column(&fields, 4),
            }
        })
        .collect()
}

fn column(fields: &[&str], index: usize) -> String {
    fields.get(index).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn parse_drops_the_header_row() {
        let records = parse_records("name,phone,address,specialization,link");
        assert!(records.is_empty());

        let records = parse_records("name,phone\nAlice,0123");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
    }

    #[test]
    fn parse_maps_columns_positionally() {
        let records = parse_records("Header\nAlice,0123456789,Hà Nội,Film,http://x");
        assert_eq!(
            records,
            vec![Technician {
                name: "Alice".to_string(),
                phone: "0123456789".to_string(),
                address: "Hà Nội".to_string(),
                specialization: "Film".to_string(),
                link: "http://x".to_string(),
            }]
        );
    }

    #[test]
    fn parse_defaults_missing_trailing_fields_to_empty() {
        let records = parse_records("Header\nBình,0987");
        assert_eq!(records[0].name, "Bình");
        assert_eq!(records[0].phone, "0987");
        assert_eq!(records[0].address, "");
        assert_eq!(records[0].specialization, "");
        assert_eq!(records[0].link, "");
    }

    #[test]
    fn parse_keeps_blank_trailing_line_as_empty_record() {
        let records = parse_records("Header\nAlice,0123,Hà Nội,Film,\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "");
        assert_eq!(records[1].link, "");
    }

    #[test]
    fn parse_has_no_quoting_so_commas_shift_columns() {
        // "Shop, Hà Nội" is not treated as one field; the tail of the row
        // lands one column to the right.
        let records = parse_records("Header\nAlice,0123,\"Shop, Hà Nội\",Film,http://x");
        assert_eq!(records[0].address, "\"Shop");
        assert_eq!(records[0].specialization, " Hà Nội\"");
        assert_eq!(records[0].link, "Film");
    }

    #[test]
    fn parse_of_header_only_body_is_empty() {
        assert!(parse_records("").is_empty());
    }

    #[tokio::test]
    async fn fetch_parses_upstream_csv() {
        let server = MockServer::start();
        let sheet_mock = server.mock(|when, then| {
            when.method(GET).path("/sheet");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body("name,phone,address,specialization,link\nAlice,0123456789,Hà Nội,Film,http://x");
        });

        let client = SheetClient::new(server.url("/sheet"));
        let records = client.fetch_records().await.unwrap();

        sheet_mock.assert();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].specialization, "Film");
    }

    #[tokio::test]
    async fn fetch_fails_on_non_success_status() {
        let server = MockServer::start();
        let sheet_mock = server.mock(|when, then| {
            when.method(GET).path("/sheet");
            then.status(404);
        });

        let client = SheetClient::new(server.url("/sheet"));
        let err = client.fetch_records().await.unwrap_err();

        sheet_mock.assert();
        match err {
            DirectoryError::UpstreamStatusError { status } => assert_eq!(status, 404),
            other => panic!("unexpected error: {}", other),
        }
    }
}
