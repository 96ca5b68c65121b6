//! Password hashing and access token signing. Both run on the worker pool.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use carpaint_types::{auth_adapter::AccessToken, prelude::*, worker::WorkerPool};

const BCRYPT_COST: u32 = 10;

fn generate_password_hash_sync(password: &str) -> ClResult<Box<str>> {
	let hash = bcrypt::hash(password, BCRYPT_COST).map_err(|err| {
		error!("bcrypt hash failed: {}", err);
		Error::Internal("password hashing failed".into())
	})?;

	Ok(hash.into())
}

pub(crate) async fn generate_password_hash(
	worker: &WorkerPool,
	password: Box<str>,
) -> ClResult<Box<str>> {
	// Account writes use the normal lane
	worker.try_run(move || generate_password_hash_sync(&password)).await
}

fn check_password_sync(password: &str, password_hash: &str) -> ClResult<()> {
	match bcrypt::verify(password, password_hash) {
		Ok(true) => Ok(()),
		Ok(false) => Err(Error::Unauthorized),
		Err(err) => {
			warn!("bcrypt verify failed: {}", err);
			Err(Error::Unauthorized)
		}
	}
}

pub(crate) async fn check_password(
	worker: &WorkerPool,
	password: Box<str>,
	password_hash: Box<str>,
) -> ClResult<()> {
	worker.try_run_immed(move || check_password_sync(&password, &password_hash)).await
}

fn generate_access_token_sync(
	access_token: &AccessToken<Box<str>>,
	jwt_secret: &str,
) -> ClResult<Box<str>> {
	let token = jsonwebtoken::encode(
		&Header::new(Algorithm::HS256),
		access_token,
		&EncodingKey::from_secret(jwt_secret.as_bytes()),
	)
	.map_err(|err| {
		error!("token encode failed: {}", err);
		Error::Internal("token signing failed".into())
	})?
	.into();

	Ok(token)
}

pub(crate) async fn generate_access_token(
	worker: &WorkerPool,
	access_token: AccessToken<Box<str>>,
	jwt_secret: Box<str>,
) -> ClResult<Box<str>> {
	worker.try_run_immed(move || generate_access_token_sync(&access_token, &jwt_secret)).await
}

fn validate_access_token_sync(token: &str, jwt_secret: &str) -> ClResult<AccessToken<Box<str>>> {
	let mut validation = Validation::new(Algorithm::HS256);
	validation.leeway = 0;

	let token_data = jsonwebtoken::decode::<AccessToken<Box<str>>>(
		token,
		&DecodingKey::from_secret(jwt_secret.as_bytes()),
		&validation,
	)
	.map_err(|err| {
		debug!("token rejected: {}", err);
		Error::Unauthorized
	})?;

	Ok(token_data.claims)
}

pub(crate) async fn validate_access_token(
	worker: &WorkerPool,
	token: Box<str>,
	jwt_secret: Box<str>,
) -> ClResult<AccessToken<Box<str>>> {
	worker.try_run_immed(move || validate_access_token_sync(&token, &jwt_secret)).await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_password_hash_roundtrip() {
		let hash = generate_password_hash_sync("s3cret").expect("hash failed");
		assert!(hash.starts_with("$2"));
		assert!(check_password_sync("s3cret", &hash).is_ok());
		assert!(matches!(check_password_sync("other", &hash), Err(Error::Unauthorized)));
	}

	#[test]
	fn test_garbage_hash_is_unauthorized() {
		assert!(matches!(check_password_sync("pw", "not-a-hash"), Err(Error::Unauthorized)));
	}

	#[test]
	fn test_token_signed_with_other_secret_is_rejected() {
		let claims = AccessToken { email: Box::from("a@x.com"), exp: Timestamp::from_now(60) };
		let token = generate_access_token_sync(&claims, "secret-a").expect("sign failed");

		let ok = validate_access_token_sync(&token, "secret-a").expect("validate failed");
		assert_eq!(ok.email.as_ref(), "a@x.com");
		assert!(matches!(validate_access_token_sync(&token, "secret-b"), Err(Error::Unauthorized)));
	}

	#[test]
	fn test_expired_token_is_rejected() {
		let claims = AccessToken { email: Box::from("a@x.com"), exp: Timestamp::from_now(-10) };
		let token = generate_access_token_sync(&claims, "secret").expect("sign failed");
		assert!(matches!(validate_access_token_sync(&token, "secret"), Err(Error::Unauthorized)));
	}

	#[test]
	fn test_malformed_token_is_rejected() {
		assert!(matches!(validate_access_token_sync("abc.def", "secret"), Err(Error::Unauthorized)));
	}
}

// vim: ts=4
