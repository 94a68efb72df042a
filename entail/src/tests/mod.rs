

mod expression_parsing;
