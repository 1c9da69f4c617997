use uno_core::{Notice, NoticeLevel};
use yew::{classes, events::MouseEvent, function_component, html, Callback, Properties};

#[derive(Properties, PartialEq)]
pub struct NoticeViewProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

pub fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "is-info",
        NoticeLevel::Error => "is-danger",
    }
}

#[function_component(NoticeView)]
pub fn notice_view(props: &NoticeViewProps) -> Html {
    let notice = match props.notice {
        Some(notice) => notice,
        None => return html! {},
    };
    let delete_onclick = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div style="position: fixed; bottom: 20px; left: 50%; width: 300px; margin-left: -150px; z-index: 100;"
            class={classes!("notification", notice_class(notice.level()))}>
            <button class="delete" onclick={delete_onclick}></button>
            <b>{ notice.text() }</b>
        </div>
    }
}
