pub mod dynamic_form;
pub mod form_page;
pub mod forms_nav;
