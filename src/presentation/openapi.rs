// src/presentation/openapi.rs
use crate::domain::user::metadata::{ApiExample, ApiKind, ApiProperty, api_properties};
use serde_json::{Value, json};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    RefOr,
    schema::{
        AdditionalProperties, ArrayBuilder, Components, KnownFormat, ObjectBuilder, Ref, Schema,
        SchemaFormat, Type,
    },
};
use utoipa::{Modify, OpenApi};

pub const SAFE_USER_SCHEMA: &str = "UserSafe";
pub const TWO_FACTOR_SCHEMA: &str = "TwoFactorAuth";

#[derive(OpenApi)]
#[openapi(
    modifiers(&SafeUserSchemas),
    info(
        title = "Users Types",
        description = "Safe user entity shape",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct SafeUserSchemas;

impl Modify for SafeUserSchemas {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components
            .schemas
            .insert(TWO_FACTOR_SCHEMA.to_string(), two_factor_schema());
        components
            .schemas
            .insert(SAFE_USER_SCHEMA.to_string(), safe_user_schema());
    }
}

fn example_value(example: ApiExample) -> Value {
    match example {
        ApiExample::Str(value) => json!(value),
        ApiExample::Int(value) => json!(value),
        ApiExample::Bool(value) => json!(value),
        ApiExample::StrList(values) => json!(values),
    }
}

fn scalar(kind: ApiKind) -> ObjectBuilder {
    match kind {
        ApiKind::String | ApiKind::Reference(_) => ObjectBuilder::new().schema_type(Type::String),
        ApiKind::Integer => ObjectBuilder::new()
            .schema_type(Type::Integer)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64))),
        ApiKind::Boolean => ObjectBuilder::new().schema_type(Type::Boolean),
        ApiKind::Enum(values) => ObjectBuilder::new()
            .schema_type(Type::String)
            .enum_values(Some(values.iter().copied())),
    }
}

fn property_schema(property: &ApiProperty) -> RefOr<Schema> {
    if let ApiKind::Reference(name) = property.kind {
        return RefOr::Ref(Ref::from_schema_name(name));
    }

    let examples: Vec<Value> = property.example.map(example_value).into_iter().collect();
    if property.is_array {
        let array = ArrayBuilder::new()
            .items(scalar(property.kind))
            .description(Some(property.description))
            .examples(examples)
            .build();
        RefOr::T(Schema::Array(array))
    } else {
        let object = scalar(property.kind)
            .description(Some(property.description))
            .examples(examples)
            .build();
        RefOr::T(Schema::Object(object))
    }
}

/// Component schema for the safe user, generated from the API property table.
pub fn safe_user_schema() -> RefOr<Schema> {
    let mut builder = ObjectBuilder::new()
        .schema_type(Type::Object)
        .description(Some("User projection that is safe to expose"));
    for property in api_properties() {
        builder = builder.property(property.name, property_schema(property));
        if property.required {
            builder = builder.required(property.name);
        }
    }
    RefOr::T(Schema::Object(builder.build()))
}

fn optional_string(description: &str) -> ObjectBuilder {
    ObjectBuilder::new()
        .schema_type(Type::String)
        .description(Some(description))
}

/// The two-factor shape is owned by the auth package; it is documented here so
/// the reference from the user schema resolves. Keys beyond the listed ones are
/// allowed and passed through.
pub fn two_factor_schema() -> RefOr<Schema> {
    let object = ObjectBuilder::new()
        .schema_type(Type::Object)
        .description(Some("Two-factor authentication configuration"))
        .additional_properties(Some(AdditionalProperties::<Schema>::FreeForm(true)))
        .property(
            "status",
            ObjectBuilder::new()
                .schema_type(Type::String)
                .enum_values(Some(["disabled", "pending", "enabled"])),
        )
        .property("factorSid", optional_string("Factor identifier"))
        .property("identity", optional_string("Identity bound to the factor"))
        .property("qr_code", optional_string("Enrolment QR code"))
        .build();
    RefOr::T(Schema::Object(object))
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    tracing::info!(path = %path.display(), "openapi snapshot written");
    Ok(())
}
