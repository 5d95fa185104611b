use crate::{
    book::BookEntry,
    components::{
        feedback_prompt::open_feedback_prompt,
        message_dialog::{MessageKind, open_message_dialog},
    },
    config::BookCurationConfig,
    curation::{self, Curator},
    errors::BookError,
};
use gpui::{prelude::FluentBuilder, *};
use gpui_component::{
    ActiveTheme, Root,
    button::Button,
    h_flex,
    input::{Input, InputState},
    label::Label,
    v_flex,
};
use std::{path::Path, sync::Arc};
use tracing::{Level, event};

const PREVIEW_SIZE: f32 = 200.;

type ActionHandler = fn(&mut BookFormView, &mut Window, &mut Context<BookFormView>);

/// The buttons of the form, each bound to one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    GenerateHtml,
    GenerateQr,
    SaveFeedback,
}

impl FormAction {
    const ALL: [FormAction; 3] = [
        FormAction::GenerateHtml,
        FormAction::GenerateQr,
        FormAction::SaveFeedback,
    ];
    fn id(self) -> &'static str {
        match self {
            FormAction::GenerateHtml => "generate-html",
            FormAction::GenerateQr => "generate-qr",
            FormAction::SaveFeedback => "save-feedback",
        }
    }
    fn label(self) -> &'static str {
        match self {
            FormAction::GenerateHtml => "HTML 생성",
            FormAction::GenerateQr => "QR코드 생성",
            FormAction::SaveFeedback => "피드백 저장",
        }
    }
    fn handler(self) -> ActionHandler {
        match self {
            FormAction::GenerateHtml => BookFormView::generate_html,
            FormAction::GenerateQr => BookFormView::generate_qr,
            FormAction::SaveFeedback => BookFormView::save_feedback,
        }
    }
}

pub(crate) struct BookFormView {
    title_input: Entity<InputState>,
    author_input: Entity<InputState>,
    url_input: Entity<InputState>,
    review_input: Entity<InputState>,
    qr_preview: Option<Arc<Image>>,
    focus_handle: FocusHandle,
}

impl BookFormView {
    pub(crate) fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self {
            title_input: cx.new(|cx| InputState::new(window, cx)),
            author_input: cx.new(|cx| InputState::new(window, cx)),
            url_input: cx.new(|cx| InputState::new(window, cx)),
            review_input: cx.new(|cx| InputState::new(window, cx).multi_line(true)),
            qr_preview: None,
            focus_handle: cx.focus_handle(),
        }
    }
    fn entry(&self, cx: &App) -> BookEntry {
        BookEntry {
            title: self.title_input.read(cx).value().to_string(),
            author: self.author_input.read(cx).value().to_string(),
            url: self.url_input.read(cx).value().to_string(),
            review: self.review_input.read(cx).value().to_string(),
        }
    }
    fn curator(cx: &App) -> Curator {
        Curator::from_config(cx.global::<BookCurationConfig>())
    }
    fn generate_html(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let span = tracing::info_span!("generate_html");
        let _enter = span.enter();
        let entry = self.entry(cx);
        match Self::curator(cx).generate_html(&entry) {
            Ok(path) => open_message_dialog(
                MessageKind::Information,
                format!("HTML 파일이 생성되었습니다: {}", display_name(&path)),
                window,
                cx,
            ),
            Err(err) => report_error(&err, window, cx),
        }
    }
    fn generate_qr(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let span = tracing::info_span!("generate_qr");
        let _enter = span.enter();
        let entry = self.entry(cx);
        match Self::curator(cx).generate_qr(&entry) {
            Ok(artifact) => {
                self.qr_preview = Some(Arc::new(Image::from_bytes(ImageFormat::Png, artifact.png)));
                cx.notify();
                open_message_dialog(
                    MessageKind::Information,
                    format!("QR 코드가 생성되었습니다: {}", display_name(&artifact.path)),
                    window,
                    cx,
                );
            }
            Err(err) => report_error(&err, window, cx),
        }
    }
    fn save_feedback(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let entry = self.entry(cx);
        let curator = Self::curator(cx);
        open_feedback_prompt(
            move |feedback, window, cx| {
                let span = tracing::info_span!("save_feedback");
                let _enter = span.enter();
                match curator.save_feedback(&entry, &feedback, curation::now()) {
                    Ok(Some(_)) => open_message_dialog(
                        MessageKind::Information,
                        "피드백이 저장되었습니다.",
                        window,
                        cx,
                    ),
                    Ok(None) => {}
                    Err(err) => report_error(&err, window, cx),
                }
            },
            window,
            cx,
        );
    }
}

fn report_error(err: &BookError, window: &mut Window, cx: &mut App) {
    match err {
        BookError::Validation(validation) => {
            event!(Level::WARN, "{}", validation);
            open_message_dialog(MessageKind::Warning, validation.to_string(), window, cx);
        }
        err => {
            event!(Level::ERROR, "{}", err);
            open_message_dialog(MessageKind::Error, err.to_string(), window, cx);
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn field_row(label: &'static str, input: &Entity<InputState>) -> Div {
    h_flex()
        .gap_2()
        .child(div().w(px(72.)).child(Label::new(label)))
        .child(div().flex_1().child(Input::new(input)))
}

impl Render for BookFormView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dialog_layer = Root::render_dialog_layer(window, cx);
        let notification_layer = Root::render_notification_layer(window, cx);
        let buttons = FormAction::ALL.map(|action| {
            Button::new(action.id())
                .label(action.label())
                .on_click(cx.listener(move |this, _, window, cx| {
                    event!(Level::INFO, action = ?action, "form action");
                    (action.handler())(this, window, cx);
                }))
        });
        v_flex()
            .track_focus(&self.focus_handle)
            .size_full()
            .p_4()
            .gap_2()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(field_row("책 제목:", &self.title_input))
            .child(field_row("저자:", &self.author_input))
            .child(field_row("URL:", &self.url_input))
            .child(Label::new("책 소개:"))
            .child(Input::new(&self.review_input).h(px(160.)))
            .child(h_flex().gap_2().children(buttons))
            .child(
                div()
                    .flex()
                    .flex_1()
                    .justify_center()
                    .items_center()
                    .when_some(self.qr_preview.clone(), |this, image| {
                        this.child(
                            img(image)
                                .size(px(PREVIEW_SIZE))
                                .object_fit(ObjectFit::Contain),
                        )
                    }),
            )
            .children(dialog_layer)
            .children(notification_layer)
    }
}

#[cfg(test)]
mod test {
    use super::{FormAction, display_name};
    use std::path::Path;

    #[test]
    fn test_dispatch_table() {
        let ids = FormAction::ALL.map(FormAction::id);
        assert_eq!(ids, ["generate-html", "generate-qr", "save-feedback"]);
        let labels = FormAction::ALL.map(FormAction::label);
        assert_eq!(labels, ["HTML 생성", "QR코드 생성", "피드백 저장"]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            display_name(Path::new("./book_review_설계와_구현.html")),
            "book_review_설계와_구현.html"
        );
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
