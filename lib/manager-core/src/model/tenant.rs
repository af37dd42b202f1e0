use serde_json::Value;
use shared_types::TenantId;
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::uuid;

/// Tenant owning the dashboard deployment. There is exactly one and it is not
/// persisted; branding updates are acknowledged without being stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub description: String,
    pub metadata: TenantMetadata,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenantMetadata {
    pub organization_name: String,
    pub industry: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub region: String,
    pub environment: String,
    pub created_at: OffsetDateTime,
    pub brand: TenantBranding,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenantBranding {
    pub logo: String,
    pub logo_type: String,
    pub card_color: String,
    pub sidenav_color: String,
    pub header_color: String,
    pub text_color: String,
    pub background_color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateTenantRequest {
    pub id: TenantId,
    pub branding: Option<Value>,
}

const BUILTIN_LOGO: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTAwIiBoZWlnaHQ9IjEwMCIgdmlld0JveD0iMCAwIDEwMCAxMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIxMDAiIGhlaWdodD0iMTAwIiBmaWxsPSIjZGYyNzI3Ii8+Cjx0ZXh0IHg9IjUwIiB5PSI1NSIgZm9udC1mYW1pbHk9IkFyaWFsLCBzYW5zLXNlcmlmIiBmb250LXNpemU9IjE0IiBmaWxsPSIjZmZmZmZmIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkb21pbmFudC1iYXNlbGluZT0ibWlkZGxlIj5UZWNoPC90ZXh0Pgo8L3N2Zz4=";

impl Tenant {
    /// The deployment owner returned by `GET /v1/tenants/me`.
    pub fn builtin() -> Self {
        Self {
            id: uuid!("519b0efa-9cc6-479d-8b1b-7586f835df40").into(),
            name: "tech-solutions-srl".to_string(),
            description: "Company specialized in DataSpace solutions for the manufacturing \
                          sector. We offer data integration services and advanced analytics to \
                          help companies make the most of their data."
                .to_string(),
            metadata: TenantMetadata {
                organization_name: "Tech Solutions S.r.l.".to_string(),
                industry: "Technology".to_string(),
                contact_name: "Mario Rossi".to_string(),
                email: "mario.rossi@techsolutions.it".to_string(),
                phone: "+39 02 1234567".to_string(),
                role: "CEO".to_string(),
                region: "eu-west-1".to_string(),
                environment: "production".to_string(),
                created_at: datetime!(2025-01-22 15:28:53.408 UTC),
                brand: TenantBranding {
                    logo: BUILTIN_LOGO.to_string(),
                    logo_type: "base64".to_string(),
                    card_color: "#1f2937".to_string(),
                    sidenav_color: "#1f2937".to_string(),
                    header_color: "#1f2937".to_string(),
                    text_color: "#f9fafb".to_string(),
                    background_color: "#0f172a".to_string(),
                },
            },
        }
    }
}
