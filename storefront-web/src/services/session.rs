//! Session fallback cookie persisted in `localStorage`, so a reload keeps the
//! user signed in.

use web_sys::Storage;

use crate::utils::constants::SESSION_STORAGE_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_session() -> Option<String> {
    local_storage()?
        .get_item(SESSION_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn save_session(token: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable; session will not survive a reload");
        return;
    };
    if let Err(e) = storage.set_item(SESSION_STORAGE_KEY, token) {
        log::warn!("Failed to persist session: {:?}", e);
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(SESSION_STORAGE_KEY) {
            log::warn!("Failed to clear session: {:?}", e);
        }
    }
}
