// Resume analysis: skill extraction → scoring engine → result assembly.
// The engine is pure; handlers own the only I/O (upload decoding, the in-memory store).

pub mod assembler;
pub mod extractor;
pub mod handlers;
pub mod scoring;
pub mod store;
