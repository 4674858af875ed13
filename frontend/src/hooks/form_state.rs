use yew::prelude::*;

/// Feedback plumbing shared by every form: one error slot, one success slot,
/// and a busy flag that disables the submit button while a request is out.
#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub busy: bool,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub set_busy: Callback<bool>,
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let busy = use_state(|| false);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            busy.set(false);
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
            busy.set(false);
        })
    };

    let set_busy = {
        let busy = busy.clone();
        Callback::from(move |value: bool| busy.set(value))
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        busy: *busy,
        handle_success,
        handle_error,
        set_busy,
    }
}
