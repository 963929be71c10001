pub mod any_view;
pub mod chain_view;
pub mod elements;
pub mod empty_view;
pub mod html_view;
pub mod if_let_view;
pub mod markup;
#[cfg(test)]
pub mod test_support;
