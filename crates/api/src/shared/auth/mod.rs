use crate::error::BursdagError;
use actix_web::HttpRequest;
use bursdag_domain::User;
use bursdag_infra::BursdagContext;

fn parse_authtoken_header(token_header_value: &str) -> String {
    let mut token = token_header_value.replace("Bearer", "");
    token = token.replace("bearer", "");
    String::from(token.trim())
}

fn get_bearer_token(req: &HttpRequest) -> Option<String> {
    let token = req.headers().get("authorization")?;
    let token = token.to_str().ok()?;
    Some(parse_authtoken_header(token))
}

/// Resolves the `User` that owns the api key in the authorization header
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &BursdagContext,
) -> Result<User, BursdagError> {
    let api_key = match get_bearer_token(req) {
        Some(token) if !token.is_empty() => token,
        _ => {
            return Err(BursdagError::Unauthorized(
                "Missing api key in authorization header".into(),
            ))
        }
    };

    match ctx.repos.users.find_by_api_key(&api_key).await {
        Some(user) => Ok(user),
        None => Err(BursdagError::Unauthorized(
            "The api key is not associated with any user".into(),
        )),
    }
}

/// Guards the reminder run trigger. The invoking cron or webhook has to
/// present the server wide secret code, not a user api key.
pub fn protect_send_reminders_route(
    req: &HttpRequest,
    ctx: &BursdagContext,
) -> Result<(), BursdagError> {
    match get_bearer_token(req) {
        Some(token) if token == ctx.config.send_reminders_secret_code => Ok(()),
        _ => Err(BursdagError::Unauthorized(
            "Invalid or missing secret code for triggering reminder runs".into(),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_auth_header_values() {
        assert_eq!(parse_authtoken_header("Bearer sk_abc123"), "sk_abc123");
        assert_eq!(parse_authtoken_header("bearer sk_abc123"), "sk_abc123");
        assert_eq!(parse_authtoken_header("  sk_abc123 "), "sk_abc123");
        assert_eq!(parse_authtoken_header(""), "");
    }
}
