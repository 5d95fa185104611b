use gpui::*;
use gpui_component::{
    WindowExt,
    button::{Button, ButtonVariants},
    label::Label,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
    Information,
    Warning,
    Error,
}

impl MessageKind {
    fn title(self) -> &'static str {
        match self {
            MessageKind::Information => "성공",
            MessageKind::Warning => "경고",
            MessageKind::Error => "오류",
        }
    }
}

/// Modal message box. The window stays blocked until it is dismissed.
pub(crate) fn open_message_dialog(
    kind: MessageKind,
    message: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut App,
) {
    let message = message.into();
    window.open_dialog(cx, move |dialog, _window, _cx| {
        dialog
            .title(kind.title())
            .child(Label::new(message.clone()))
            .footer(move |_dialog, _state, _window, _cx| {
                vec![
                    Button::new("message-ok")
                        .primary()
                        .label("확인")
                        .on_click(|_, window, cx| {
                            window.close_dialog(cx);
                        }),
                ]
            })
    });
}
