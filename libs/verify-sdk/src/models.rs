//! Payload and report models for the verification gateway.

use std::collections::HashMap;

use bytes::Bytes;
use mime::Mime;
use serde::{Deserialize, Serialize};

/// Opaque multipart container submitted to the verification service.
///
/// Parts are transmitted in insertion order as a `multipart/form-data`
/// body. The gateway never inspects the parts beyond encoding them; any
/// shape validation happens server-side.
#[derive(Debug, Clone, Default)]
pub struct UploadPayload {
    parts: Vec<PayloadPart>,
}

/// A single part of an [`UploadPayload`].
#[derive(Debug, Clone)]
pub enum PayloadPart {
    /// A plain form field.
    Text { name: String, value: String },
    /// A file field with binary content.
    File {
        name: String,
        file_name: String,
        content_type: Mime,
        data: Bytes,
    },
}

impl UploadPayload {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain form field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(PayloadPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a file field.
    ///
    /// The content type is taken as a parsed [`Mime`] so that encoding the
    /// part downstream cannot fail.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Mime,
        data: impl Into<Bytes>,
    ) -> Self {
        self.parts.push(PayloadPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type,
            data: data.into(),
        });
        self
    }

    /// Assemble the exact field set the verification form submits: the
    /// `image` file plus the label fields and the OCR switch.
    #[must_use]
    pub fn label_submission(
        file_name: impl Into<String>,
        content_type: Mime,
        image: impl Into<Bytes>,
        fields: &LabelFields,
        use_advanced_ocr: bool,
    ) -> Self {
        let mut payload = Self::new()
            .file("image", file_name, content_type, image)
            .text("brand_name", fields.brand_name.clone())
            .text("product_type", fields.product_type.clone())
            .text("alcohol_content", fields.alcohol_content.to_string());
        if let Some(net_contents) = &fields.net_contents {
            payload = payload.text("net_contents", net_contents.clone());
        }
        payload.text("use_advanced_ocr", use_advanced_ocr.to_string())
    }

    /// Borrow the parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    /// Consume the payload, yielding the parts in insertion order.
    #[must_use]
    pub fn into_parts(self) -> Vec<PayloadPart> {
        self.parts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl PayloadPart {
    /// The form field name of this part.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// The label data entered alongside the image upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFields {
    /// Name of the alcohol brand.
    pub brand_name: String,
    /// Type of alcohol product.
    pub product_type: String,
    /// Alcohol content percentage (ABV).
    pub alcohol_content: f64,
    /// Volume of the container (e.g. "750 mL").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_contents: Option<String>,
}

/// Typed view of the service's verification response.
///
/// The gateway returns the response body verbatim as JSON; this DTO is a
/// convenience for consumers that want structured access to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Overall verification result.
    pub success: bool,
    /// Fields that matched successfully.
    pub matches: HashMap<String, bool>,
    /// Fields that failed to match.
    pub mismatches: Vec<String>,
    /// Raw text extracted from the image.
    pub raw_ocr_text: String,
    /// Human-readable result message.
    pub message: String,
    /// Close matches found for failed verifications.
    #[serde(default)]
    pub close_matches: HashMap<String, Vec<String>>,
    /// Dimensions, file size and similar facts about the processed image.
    #[serde(default)]
    pub image_info: Option<serde_json::Value>,
}

impl VerificationReport {
    /// Convert a verbatim response body into the typed report.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
