use serde::Deserialize;

use crate::error::{Result, RobotError};

/// Body returned by the webhook: `{"errcode": 0, "errmsg": "ok"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendResult {
    pub errcode: i64,
    pub errmsg: String,
}

impl SendResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errcode == 0
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }

        Err(RobotError::Rejected {
            code: self.errcode,
            message: self.errmsg,
        })
    }
}
