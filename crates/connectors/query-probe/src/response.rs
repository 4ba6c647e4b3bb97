//! The invocation result, in the shape of an HTTP-style response.

use serde::Serialize;

use crate::probe::ProbeResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResponse {
    /// 200 when the statement ran, 500 otherwise.
    pub status_code: u16,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub message: String,
}

impl From<&ProbeResult> for ProbeResponse {
    fn from(result: &ProbeResult) -> Self {
        ProbeResponse {
            status_code: result.status.code(),
            body: ResponseBody {
                message: result.message(),
            },
        }
    }
}
