use std::sync::Arc;

use crate::error::RilError;
use crate::traits::HostEnv;
use crate::types::{RequestCode, RilErrno, Token};

/// Completes one request exactly once.
///
/// Completion consumes the responder. A responder dropped without being
/// completed (early return, hosted-side panic, executor shutdown) completes
/// its request with `GenericFailure`, so the host never waits on a token
/// forever.
pub struct Responder {
    env: Arc<dyn HostEnv>,
    token: Token,
    code: RequestCode,
    completed: bool,
}

impl Responder {
    pub fn new(env: Arc<dyn HostEnv>, token: Token, code: RequestCode) -> Self {
        Self {
            env,
            token,
            code,
            completed: false,
        }
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn code(&self) -> RequestCode {
        self.code
    }

    pub fn complete(mut self, errno: RilErrno, response: &[u8]) {
        self.completed = true;
        log::trace!("complete {} {:?}: {:?} ({} bytes)", self.code, self.token, errno, response.len());
        self.env.on_request_complete(self.token, errno, response);
    }

    pub fn succeed(self, response: &[u8]) {
        self.complete(RilErrno::Success, response);
    }

    pub fn fail(self, err: &RilError) {
        log::warn!("{} {:?} failed: {}", self.code, self.token, err);
        let response = err.response();
        self.complete(err.errno(), &response);
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if !self.completed {
            log::error!("{} {:?} dropped without completion; failing it", self.code, self.token);
            self.env
                .on_request_complete(self.token, RilErrno::GenericFailure, &[]);
        }
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("token", &self.token)
            .field("code", &self.code)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
