use pretty_assertions::assert_eq;
use relay_core_contact_contracts::{
    compose::MockContactComposeService,
    delivery::{ContactDeliveryError, MockContactDeliveryService},
    ContactFeatureService, ContactSendMessageError,
};
use relay_demo::contact::{
    contact_email, contact_receipt, email_receipt, submission, MESSAGE_JO, REQUEST_ID_1,
};
use relay_models::contact::{ContactField, ContactSubmission};
use relay_utils::assert_matches;

use crate::ContactFeatureServiceImpl;

type Sut = ContactFeatureServiceImpl<MockContactComposeService, MockContactDeliveryService>;

#[tokio::test]
async fn ok() {
    // Arrange
    let compose = MockContactComposeService::new().with_compose(
        *REQUEST_ID_1,
        MESSAGE_JO.clone(),
        contact_email(),
    );
    let delivery =
        MockContactDeliveryService::new().with_deliver(contact_email(), Ok(email_receipt()));

    let sut = Sut { compose, delivery };

    // Act
    let result = sut.send_message(*REQUEST_ID_1, submission()).await;

    // Assert
    assert_eq!(result.unwrap(), contact_receipt());
}

#[tokio::test]
async fn markup_is_removed_before_compose() {
    // Arrange
    let compose = MockContactComposeService::new().with_compose(
        *REQUEST_ID_1,
        MESSAGE_JO.clone(),
        contact_email(),
    );
    let delivery =
        MockContactDeliveryService::new().with_deliver(contact_email(), Ok(email_receipt()));

    let sut = Sut { compose, delivery };

    let input = ContactSubmission {
        name: "<b>Jo</b>".into(),
        message: "Hello, this is a <script>alert(1)</script>test message.".into(),
        ..submission()
    };

    // Act
    let result = sut.send_message(*REQUEST_ID_1, input).await;

    // Assert
    assert_eq!(result.unwrap(), contact_receipt());
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let sut = Sut::default();

    let input = ContactSubmission {
        name: "J".into(),
        message: "short".into(),
        ..submission()
    };

    // Act
    let result = sut.send_message(*REQUEST_ID_1, input).await;

    // Assert
    let Err(ContactSendMessageError::Validation(violations)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert_eq!(
        violations.iter().map(|v| v.field).collect::<Vec<_>>(),
        [ContactField::Name, ContactField::Message]
    );
}

#[tokio::test]
async fn markup_only_name() {
    // Arrange
    let sut = Sut::default();

    let input = ContactSubmission {
        name: "<i></i>".into(),
        ..submission()
    };

    // Act
    let result = sut.send_message(*REQUEST_ID_1, input).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSendMessageError::Validation(v)) if v.len() == 1 && v[0].field == ContactField::Name
    );
}

#[tokio::test]
async fn compose_error() {
    // Arrange
    let mut compose = MockContactComposeService::new();
    compose
        .expect_compose()
        .once()
        .return_once(|_, _| Err(anyhow::anyhow!("template not found")));

    let sut = Sut {
        compose,
        delivery: MockContactDeliveryService::new(),
    };

    // Act
    let result = sut.send_message(*REQUEST_ID_1, submission()).await;

    // Assert
    assert_matches!(result, Err(ContactSendMessageError::Other(_)));
}

#[tokio::test]
async fn delivery_failed() {
    // Arrange
    let compose = MockContactComposeService::new().with_compose(
        *REQUEST_ID_1,
        MESSAGE_JO.clone(),
        contact_email(),
    );
    let delivery = MockContactDeliveryService::new().with_deliver(
        contact_email(),
        Err(ContactDeliveryError::Exhausted {
            attempts: 3,
            source: anyhow::anyhow!("connection refused"),
        }),
    );

    let sut = Sut { compose, delivery };

    // Act
    let result = sut.send_message(*REQUEST_ID_1, submission()).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSendMessageError::Delivery(ContactDeliveryError::Exhausted { attempts: 3, .. }))
    );
}
