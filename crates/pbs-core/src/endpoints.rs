//! Catalog of known upstream endpoint paths.

/// Endpoint paths known to exist on the upstream API.
///
/// This list only feeds the CLI's `list-endpoints` output; it is never
/// used for validation. The upstream remains the source of truth for
/// which paths exist.
pub const KNOWN_ENDPOINTS: &[&str] = &[
    "/",
    "/amt-items",
    "/atc-codes",
    "/container-organisation-relationships",
    "/containers",
    "/copayments",
    "/criteria",
    "/criteria-parameter-relationships",
    "/dispensing-rules",
    "/extemporaneous-ingredients",
    "/extemporaneous-preparations",
    "/extemporaneous-prep-sfp-relationships",
    "/extemporaneous-tariffs",
    "/fees",
    "/indications",
    "/item-atc-relationships",
    "/item-dispensing-rule-relationships",
    "/item-organisation-relationships",
    "/item-overview",
    "/item-prescribing-text-relationships",
    "/item-pricing-events",
    "/item-restriction-relationships",
    "/items",
    "/markup-bands",
    "/organisations",
    "/parameters",
    "/prescribers",
    "/prescribing-texts",
    "/program-dispensing-rules",
    "/programs",
    "/restriction-prescribing-text-relationships",
    "/restrictions",
    "/schedules",
    "/standard-formula-preparations",
    "/summary-of-changes",
];
