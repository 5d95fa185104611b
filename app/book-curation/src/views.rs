mod book_form;

pub(crate) use book_form::BookFormView;
