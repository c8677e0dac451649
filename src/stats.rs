use crate::{
    models::{FilteredStatsView, RawStats, StatCard},
    policy::Role,
};

/// Role-Scoped Aggregator
///
/// Pure projection of the raw counter set into the card list a role may see.
/// No I/O, no shared state: calling `project` twice with the same inputs
/// yields identical output, which is what allows the client to cache the view
/// and recompute it safely whenever role and dataset have both arrived.

/// Card titles in render order. The wire vocabulary of the portal UI.
const TITLE_FIRMALAR: &str = "Firmalar";
const TITLE_VERI_HARITASI: &str = "Veri Haritası";
const TITLE_AKSIYONLAR: &str = "Aksiyonlar";
const TITLE_DOKUMAN_ARSIVI: &str = "Doküman Arşivi";
const TITLE_VARLIK_ENVANTERI: &str = "Varlık Envanteri";
const TITLE_EGITIMLER: &str = "Eğitimler";

/// project
///
/// Builds the role-specific dashboard view from the full counter set.
///
/// - Null counters become 0; rendering never receives a null count.
/// - `Representative` does not get the asset inventory card at all (absent,
///   not zeroed) and the grid drops from 6 to 5 columns.
/// - `Unknown` gets the most restrictive known projection, i.e. the
///   representative's. Fail closed: an unrecognized role must never widen
///   into "all cards".
/// - Every other known role sees all six cards.
pub fn project(role: Role, raw: &RawStats) -> FilteredStatsView {
    let show_inventory = match role {
        Role::Advisor | Role::Manager => true,
        Role::Representative | Role::Unknown => false,
    };

    let columns: u8 = if show_inventory { 6 } else { 5 };
    let layout_hint = format!("xl:grid-cols-{}", columns);

    let mut cards = Vec::with_capacity(columns as usize);
    let mut push = |title: &str, count: Option<i64>| {
        cards.push(StatCard {
            title: title.to_string(),
            count: count.unwrap_or(0),
            layout_hint: layout_hint.clone(),
        });
    };

    push(TITLE_FIRMALAR, raw.firma_sayisi);
    push(TITLE_VERI_HARITASI, raw.veri_harita_sayisi);
    push(TITLE_AKSIYONLAR, raw.aksiyon_sayisi);
    push(TITLE_DOKUMAN_ARSIVI, raw.dokuman_sayisi);
    if show_inventory {
        push(TITLE_VARLIK_ENVANTERI, raw.envanter_sayisi);
    }
    push(TITLE_EGITIMLER, raw.egitim_sayisi);

    FilteredStatsView { cards, columns }
}
