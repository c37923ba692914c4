/// Stylesheet for the injected search panel and results line

use web_sys::Document;

use crate::error::MountError;

const SEARCH_STYLES: &str = r#"
.search-container {
    margin: 2rem 0;
    text-align: center;
}

.search-wrapper {
    position: relative;
    max-width: 500px;
    margin: 0 auto 1rem;
}

.search-input {
    width: 100%;
    padding: 1rem 3rem 1rem 3rem;
    border: 2px solid var(--border-color);
    border-radius: 50px;
    background: var(--bg-primary);
    color: var(--text-primary);
    font-size: 1rem;
    transition: all 0.3s ease;
}

.search-input:focus {
    outline: none;
    border-color: var(--color-1);
    box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.1);
}

.search-icon {
    position: absolute;
    left: 1rem;
    top: 50%;
    transform: translateY(-50%);
    color: var(--text-secondary);
}

.clear-search {
    position: absolute;
    right: 1rem;
    top: 50%;
    transform: translateY(-50%);
    background: none;
    border: none;
    color: var(--text-secondary);
    cursor: pointer;
    padding: 0.5rem;
    border-radius: 50%;
    transition: all 0.3s ease;
}

.clear-search:hover {
    background: var(--bg-secondary);
    color: var(--text-primary);
}

.search-filters {
    display: flex;
    gap: 0.5rem;
    justify-content: center;
    flex-wrap: wrap;
}

.filter-btn {
    padding: 0.5rem 1rem;
    border: 2px solid var(--border-color);
    background: var(--bg-primary);
    color: var(--text-secondary);
    border-radius: 25px;
    cursor: pointer;
    transition: all 0.3s ease;
    font-size: 0.9rem;
}

.filter-btn:hover, .filter-btn.active {
    background: var(--color-1);
    color: white;
    border-color: var(--color-1);
}

.results-info {
    text-align: center;
    color: var(--text-secondary);
    margin-bottom: 1rem;
    font-size: 0.9rem;
}

@media (max-width: 768px) {
    .search-filters {
        gap: 0.25rem;
    }

    .filter-btn {
        padding: 0.4rem 0.8rem;
        font-size: 0.8rem;
    }
}
"#;

/// Append the search panel stylesheet to `<head>`
pub fn inject(document: &Document) -> Result<(), MountError> {
    let head = document.head().ok_or(MountError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(SEARCH_STYLES));
    head.append_child(&style)?;
    Ok(())
}
