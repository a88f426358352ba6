//! Shared helpers for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;
use std::process::Command;

use lopdf::content::Content;
use lopdf::{Document, Object};
use rx_scribe::domain::document::latin1;

/// The binary with every variable that could leak host settings removed
pub fn rx_scribe_bin(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rx-scribe"));
    cmd.env_remove("GOOGLE_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_API_BASE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home);
    cmd
}

/// Encode a small blank image in the given format
pub fn sample_image(format: image::ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(8, 8));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format)
        .expect("encode sample image");
    buf
}

/// Every string drawn with `Tj`, page by page, decoded from Latin-1
pub fn drawn_strings(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).expect("valid PDF");
    let mut strings = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let content = Content::decode(&doc.get_page_content(page_id).expect("page content"))
            .expect("decodable content stream");
        for op in content.operations {
            if op.operator == "Tj" {
                if let Some(Object::String(text, _)) = op.operands.first() {
                    strings.push(latin1::decode(text));
                }
            }
        }
    }
    strings
}

/// Number of pages in a PDF
pub fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).expect("valid PDF").get_pages().len()
}

/// A generateContent response body carrying one text candidate
pub fn gemini_text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}
