pub mod ask;
pub mod listen;
pub mod load_knowledge_base;
