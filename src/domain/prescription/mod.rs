//! Prescription domain module

mod instruction;
mod language;
mod prescription_image;

pub use instruction::Instruction;
pub use language::{Language, ALL_LANGUAGES};
pub use prescription_image::{human_readable_bytes, ImageMimeType, PrescriptionImage};
