/*!
 * Wire types shared with the server
 */

use serde::Deserialize;

/// Successful login body
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
