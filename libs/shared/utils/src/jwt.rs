use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::{JwtClaims, User};

type HmacSha256 = Hmac<Sha256>;

/// Sign an HS256 token for `user_name`. Returns the token and its expiry.
pub fn issue_token(
    user_name: &str,
    email: &str,
    config: &AppConfig,
) -> Result<(String, DateTime<Utc>), String> {
    if config.jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let now = Utc::now();
    let expiration = now + Duration::minutes(config.jwt_expiration_minutes);

    let header = json!({
        "alg": "HS256",
        "typ": "JWT"
    });

    let claims = JwtClaims {
        sub: user_name.to_string(),
        exp: Some(expiration.timestamp().max(0) as u64),
        name: Some(user_name.to_string()),
        email: Some(email.to_string()),
        role: None,
        jti: Some(Uuid::new_v4().to_string()),
        iss: Some(config.jwt_issuer.clone()),
        aud: Some(config.jwt_audience.clone()),
        iat: Some(now.timestamp().max(0) as u64),
    };

    let claims_json = serde_json::to_string(&claims)
        .map_err(|e| format!("Failed to encode claims: {}", e))?;

    let header_b64 = URL_SAFE_NO_PAD.encode(header.to_string());
    let claims_b64 = URL_SAFE_NO_PAD.encode(claims_json);
    let signing_input = format!("{}.{}", header_b64, claims_b64);

    let signature = sign(&signing_input, &config.jwt_secret)?;

    debug!("Issued token for user: {}", user_name);
    Ok((format!("{}.{}", signing_input, signature), expiration))
}

fn sign(signing_input: &str, secret: &str) -> Result<String, String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signing_input.as_bytes());
    Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

pub fn validate_token(token: &str, config: &AppConfig) -> Result<User, String> {
    if config.jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    // Split token into parts
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid token format".to_string());
    }

    let header_b64 = parts[0];
    let claims_b64 = parts[1];
    let signature_b64 = parts[2];

    let signature = match URL_SAFE_NO_PAD.decode(signature_b64) {
        Ok(sig) => sig,
        Err(e) => {
            debug!("Failed to decode signature: {}", e);
            return Err("Invalid signature encoding".to_string());
        }
    };

    let signature_string = format!("{}.{}", header_b64, claims_b64);

    let mut mac = match HmacSha256::new_from_slice(config.jwt_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return Err("Failed to create HMAC".to_string()),
    };

    mac.update(signature_string.as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err("Invalid token signature".to_string());
    }

    let claims_json = match URL_SAFE_NO_PAD.decode(claims_b64) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(json_str) => json_str,
            Err(_) => return Err("Invalid claims encoding".to_string()),
        },
        Err(_) => return Err("Invalid claims encoding".to_string()),
    };

    let claims: JwtClaims = match serde_json::from_str(&claims_json) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to parse claims: {}", e);
            return Err("Invalid claims format".to_string());
        },
    };

    // No clock skew allowance
    match claims.exp {
        Some(exp) => {
            let now = Utc::now().timestamp().max(0) as u64;
            if exp <= now {
                debug!("Token expired at {} (now: {})", exp, now);
                return Err("Token expired".to_string());
            }
        }
        None => return Err("Token has no expiration".to_string()),
    }

    if claims.iss.as_deref() != Some(config.jwt_issuer.as_str()) {
        debug!("Unexpected issuer: {:?}", claims.iss);
        return Err("Invalid token issuer".to_string());
    }

    if claims.aud.as_deref() != Some(config.jwt_audience.as_str()) {
        debug!("Unexpected audience: {:?}", claims.aud);
        return Err("Invalid token audience".to_string());
    }

    let created_at = claims.iat
        .and_then(|timestamp| Utc.timestamp_opt(timestamp as i64, 0).single());

    let user = User {
        id: claims.sub,
        name: claims.name,
        email: claims.email,
        role: claims.role,
        created_at,
    };

    debug!("Token validated successfully for user: {}", user.id);
    Ok(user)
}
