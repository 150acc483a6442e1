use crate::document::{Fields, Node};
use crate::domain::models::Attachment;
use crate::errors::ClientError;

const ENTITY: &str = "match_attachment";

/// Parse a match attachment, wrapped in `match_attachment` or bare
pub fn parse_attachment(raw: &Node) -> Result<Attachment, ClientError> {
    let fields = Fields::new(ENTITY, raw.unwrap_entity(ENTITY))?;

    Ok(Attachment {
        id: fields.required("id")?,
        match_id: fields.required("match_id")?,
        user_id: fields.optional("user_id")?,
        description: fields.optional("description")?,
        url: fields.optional("url")?,
        original_file_name: fields.optional("original_file_name")?,
        asset_file_name: fields.optional("asset_file_name")?,
        asset_content_type: fields.optional("asset_content_type")?,
        asset_file_size: fields.optional("asset_file_size")?,
        asset_url: fields.optional("asset_url")?,
        created_at: fields.optional("created_at")?,
        updated_at: fields.optional("updated_at")?,
    })
}

pub fn parse_attachments(raw: &Node) -> Result<Vec<Attachment>, ClientError> {
    super::parse_list(raw, ENTITY, parse_attachment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Format, parse};

    #[test]
    fn test_link_attachment_leaves_asset_fields_unset() {
        let raw = parse(
            r#"{"match_attachment": {
                "id": 301, "match_id": 5001, "user_id": 9,
                "description": "VOD", "url": "https://example.com/vod",
                "original_file_name": null, "asset_file_name": null,
                "asset_content_type": null, "asset_file_size": null, "asset_url": null,
                "created_at": "2015-01-19T16:57:17-05:00",
                "updated_at": "2015-01-19T16:57:17-05:00"
            }}"#,
            Format::Json,
        )
        .unwrap();

        let attachment = parse_attachment(&raw).unwrap();
        assert_eq!(attachment.id, 301);
        assert_eq!(attachment.match_id, 5001);
        assert_eq!(attachment.description.as_deref(), Some("VOD"));
        assert_eq!(attachment.asset_url, None);
        assert_eq!(attachment.asset_file_size, None);
    }

    #[test]
    fn test_listing_in_xml() {
        let raw = parse(
            r#"<match-attachments type="array">
              <match-attachment>
                <id type="integer">1</id>
                <match-id type="integer">5001</match-id>
                <description>Stream link</description>
              </match-attachment>
              <match-attachment>
                <id type="integer">2</id>
                <match-id type="integer">5001</match-id>
                <asset-file-name>bracket.png</asset-file-name>
                <asset-file-size type="integer">20480</asset-file-size>
              </match-attachment>
            </match-attachments>"#,
            Format::Xml,
        )
        .unwrap();

        let attachments = parse_attachments(&raw).unwrap();
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].description.as_deref(), Some("Stream link"));
        assert_eq!(attachments[1].asset_file_size, Some(20480));
        assert_eq!(attachments[1].description, None);
    }

    #[test]
    fn test_missing_match_id_is_malformed() {
        let raw = parse(r#"{"match_attachment": {"id": 1}}"#, Format::Json).unwrap();
        assert!(matches!(
            parse_attachment(&raw).unwrap_err(),
            ClientError::MalformedResponse { .. }
        ));
    }
}
