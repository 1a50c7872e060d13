pub mod name_parser;
