use crate::errors::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}

/// Plain-text response, used for slash-command acks (Slack shows the
/// body back to the invoking user).
pub fn text_response(body: impl Into<String>) -> ResultResp {
    let resp: Response = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(body.into()))
        .unwrap();

    Ok(resp)
}
