//! PDF document exporter adapter

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use crate::application::ports::{DocumentExporter, ExportError, ExportedDocument};
use crate::domain::document::{Font, Latin1Text, PageContent, PageLayout};

/// PDF version written in the file header
const PDF_VERSION: &str = "1.4";

/// Producer recorded in the document info dictionary
const PRODUCER: &str = "rx-scribe";

/// Renders text to PDF using the standard Helvetica fonts
pub struct PdfExporter {
    layout: PageLayout,
}

impl PdfExporter {
    /// Create an exporter with the default A4 layout
    pub fn new() -> Self {
        Self::with_layout(PageLayout::default())
    }

    /// Create an exporter with a custom layout
    pub fn with_layout(layout: PageLayout) -> Self {
        Self { layout }
    }

    fn font_dictionary(font: Font) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        }
    }

    fn page_operations(page: &PageContent) -> Vec<Operation> {
        let mut operations = Vec::with_capacity(page.runs.len() * 5);
        for run in &page.runs {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(run.font.resource_name().as_bytes().to_vec()),
                    Object::Integer(run.size),
                ],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(run.x), Object::Integer(run.y)],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(run.text.clone(), StringFormat::Literal)],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        operations
    }

    /// Build and serialize the document. Object ids are allocated in a
    /// fixed order and nothing time-dependent is written.
    fn render(&self, title: &[u8], pages: &[PageContent]) -> Result<Vec<u8>, lopdf::Error> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(Self::font_dictionary(Font::Helvetica));
        let bold_id = doc.add_object(Self::font_dictionary(Font::HelveticaBold));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                Font::Helvetica.resource_name() => regular_id,
                Font::HelveticaBold.resource_name() => bold_id,
            },
        });

        let mut kids = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content {
                operations: Self::page_operations(page),
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Count" => Object::Integer(kids.len() as i64),
            "Kids" => kids,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(self.layout.page_width),
                Object::Integer(self.layout.page_height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(title.to_vec(), StringFormat::Literal),
            "Producer" => Object::string_literal(PRODUCER),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExporter for PdfExporter {
    fn export(&self, title: &str, text: &str) -> Result<ExportedDocument, ExportError> {
        let title = Latin1Text::encode(title);
        let body = Latin1Text::encode(text);
        let substitutions = title.substitutions() + body.substitutions();

        // A title is one line; any break inside it is drawn as a space
        let title_bytes = title.into_lines().join(&b' ');

        let pages = self.layout.paginate(&title_bytes, body.lines());
        let bytes = self
            .render(&title_bytes, &pages)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;

        debug!(
            lines = body.lines().len(),
            pages = pages.len(),
            substitutions,
            "rendered pdf"
        );

        Ok(ExportedDocument {
            bytes,
            substitutions,
            pages: pages.len(),
        })
    }
}
