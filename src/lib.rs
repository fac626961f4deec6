pub mod token_parser_util;
pub mod unique_sorter_util;
