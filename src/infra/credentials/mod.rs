pub mod jwt_credential_service;
