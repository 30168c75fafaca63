use super::*;

/// Tests creating a character.
///
/// Verifies that the repository assigns a well-formed id, stores the name and
/// starts with no attributes.
///
/// Expected: Ok(Character)
#[tokio::test]
async fn creates_character_with_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let created = repo
        .create(CreateCharacterParam {
            name: name("Frodo"),
        })
        .await?;

    assert!(ObjectId::parse(&created.id).is_ok());
    assert_eq!(created.name, "Frodo");
    assert!(created.attributes.is_empty());

    Ok(())
}

/// Tests that the stored document starts with a zero version counter.
///
/// Expected: stored row with version 0 and null attributes
#[tokio::test]
async fn stores_internal_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = CharacterRepository::new(db)
        .create(CreateCharacterParam { name: name("Sam") })
        .await?;

    let stored = entity::prelude::Character::find_by_id(created.id.clone())
        .one(db)
        .await?
        .unwrap();

    assert_eq!(stored.version, 0);
    assert!(stored.attributes.is_none());

    Ok(())
}

/// Tests that consecutive creates never reuse an id.
///
/// Expected: distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let first = repo.create(CreateCharacterParam { name: name("Merry") }).await?;
    let second = repo
        .create(CreateCharacterParam {
            name: name("Pippin"),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
