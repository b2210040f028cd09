pub mod qa_check;
