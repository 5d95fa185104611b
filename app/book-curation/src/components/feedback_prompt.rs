use gpui::*;
use gpui_component::{
    WindowExt,
    button::{Button, ButtonVariants},
    form::{field, v_form},
    input::{Input, InputState},
};
use std::rc::Rc;
use tracing::{Level, event};

type OnSubmit = dyn Fn(SharedString, &mut Window, &mut App);

/// Asks for a single line of feedback. `on_submit` only runs when the user
/// confirms, cancelling closes the dialog and nothing else.
pub(crate) fn open_feedback_prompt(
    on_submit: impl Fn(SharedString, &mut Window, &mut App) + 'static,
    window: &mut Window,
    cx: &mut App,
) {
    event!(Level::INFO, "feedback prompt opened");
    let on_submit: Rc<OnSubmit> = Rc::new(on_submit);
    let feedback_input = cx.new(|cx| InputState::new(window, cx).placeholder("피드백"));
    window.open_dialog(cx, move |dialog, _window, _cx| {
        dialog
            .title("피드백 입력")
            .child(
                v_form().child(
                    field()
                        .label("피드백을 입력하세요:")
                        .child(Input::new(&feedback_input)),
                ),
            )
            .footer({
                let feedback_input = feedback_input.clone();
                let on_submit = on_submit.clone();
                move |_dialog, _state, _window, _cx| {
                    vec![
                        Button::new("cancel").label("취소").on_click(|_, window, cx| {
                            event!(Level::INFO, "feedback prompt cancelled");
                            window.close_dialog(cx);
                        }),
                        Button::new("ok").primary().label("확인").on_click({
                            let feedback_input = feedback_input.clone();
                            let on_submit = on_submit.clone();
                            move |_, window, cx| {
                                let feedback = feedback_input.read(cx).value();
                                window.close_dialog(cx);
                                on_submit(feedback, window, cx);
                            }
                        }),
                    ]
                }
            })
    });
}
