pub mod definition;
pub mod document_links;
pub mod highlight;
pub mod hover;
pub mod markup;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_support;
