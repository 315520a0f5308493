
use log::info;
use mongo_auth::{
    AuthError, Authenticator, Credential, Evidence, ServerApi, ServerApiVersion,
};

// cargo test --test test_020_dispatch -- --nocapture
#[test]
fn test_020_dispatch() {
    let mut _log_handle = test_utils::init_logger();

    info!("validate authenticator selection for the fixed mechanism set");
    password_evidence_dispatch();
    external_evidence_dispatch();
    property_forwarding();
    no_match();
}

fn password_evidence_dispatch() {
    for (mechanism, expected_name) in [
        (None, "DEFAULT"),
        (Some("MONGODB-CR"), "MONGODB-CR"),
        (Some("SCRAM-SHA-1"), "SCRAM-SHA-1"),
        (Some("SCRAM-SHA-256"), "SCRAM-SHA-256"),
        (Some("PLAIN"), "PLAIN"),
    ] {
        let credential = test_utils::password_credential(mechanism, "alice").unwrap();
        let authenticator = Authenticator::for_credential(&credential, None).unwrap();
        assert_eq!(expected_name, authenticator.mechanism_name());
    }

    // the principal carries source, username, and the untouched secret
    let credential = test_utils::password_credential(Some("SCRAM-SHA-256"), "alice").unwrap();
    let server_api = ServerApi::new(ServerApiVersion::V1);
    let Authenticator::ScramSha256 { principal, .. } =
        Authenticator::for_credential(&credential, Some(&server_api)).unwrap()
    else {
        panic!("expected a SCRAM-SHA-256 authenticator");
    };
    assert_eq!("admin", principal.source());
    assert_eq!("alice", principal.username());
    assert_eq!("secret", principal.password().unsecure());
}

fn external_evidence_dispatch() {
    let credential =
        Credential::from_components(Some("MONGODB-X509"), None, None, Some("bob"), None).unwrap();
    let authenticator = Authenticator::for_credential(&credential, None).unwrap();
    assert_eq!("MONGODB-X509", authenticator.mechanism_name());
    assert!(matches!(
        authenticator,
        Authenticator::X509 {
            username: Some(_),
            ..
        }
    ));

    let credential =
        Credential::from_components(Some("MONGODB-AWS"), None, None, None, None).unwrap();
    let Authenticator::MongoDbAws {
        access_key_id,
        secret_access_key,
        ..
    } = Authenticator::for_credential(&credential, None).unwrap()
    else {
        panic!("expected a MONGODB-AWS authenticator");
    };
    assert_eq!(None, access_key_id);
    assert_eq!(None, secret_access_key);

    let credential =
        Credential::from_components(Some("GSSAPI"), None, None, Some("bob@REALM"), None).unwrap();
    let Authenticator::Gssapi { password, .. } =
        Authenticator::for_credential(&credential, None).unwrap()
    else {
        panic!("expected a GSSAPI authenticator");
    };
    assert_eq!(None, password);
}

fn property_forwarding() {
    let credential =
        Credential::from_components(Some("GSSAPI"), None, None, Some("bob@REALM"), None)
            .unwrap()
            .with_mechanism_property("SERVICE_NAME", "mongodb")
            .with_mechanism_property("CANONICALIZE_HOST_NAME", true)
            .with_mechanism_property("SERVICE_REALM", "EXAMPLE.COM");

    let Authenticator::Gssapi { properties, .. } =
        Authenticator::for_credential(&credential, None).unwrap()
    else {
        panic!("expected a GSSAPI authenticator");
    };
    // every value arrives in its string form
    assert_eq!(
        vec![
            ("CANONICALIZE_HOST_NAME".to_string(), "true".to_string()),
            ("SERVICE_NAME".to_string(), "mongodb".to_string()),
            ("SERVICE_REALM".to_string(), "EXAMPLE.COM".to_string()),
        ],
        properties
    );

    let credential = Credential::from_components(
        Some("MONGODB-AWS"),
        None,
        None,
        Some("AKIA123"),
        Some(Evidence::password("wJalrXUtnFEMI")),
    )
    .unwrap()
    .with_mechanism_property("AWS_SESSION_TOKEN", "token-123");
    let Authenticator::MongoDbAws { properties, .. } =
        Authenticator::for_credential(&credential, None).unwrap()
    else {
        panic!("expected a MONGODB-AWS authenticator");
    };
    assert_eq!(
        vec![("AWS_SESSION_TOKEN".to_string(), "token-123".to_string())],
        properties
    );
}

fn no_match() {
    // the AWS secret access key has to be pure ASCII
    let credential = Credential::from_components(
        Some("MONGODB-AWS"),
        None,
        None,
        Some("AKIA123"),
        Some(Evidence::password("geh€im")),
    )
    .unwrap();
    assert!(matches!(
        Authenticator::for_credential(&credential, None),
        Err(AuthError::InvalidArgument(_))
    ));
}
