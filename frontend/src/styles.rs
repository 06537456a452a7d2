//! Static stylesheets injected once into each element.

pub const CARD_STYLE: &str = r#"
  .uet-card {
    --uet-label-color: var(--secondary-text-color);
  }
  .uet-wrapper {
    display: flex;
    flex-direction: column;
    gap: 12px;
    padding: 16px;
  }
  .uet-status {
    font-size: 0.75rem;
    text-transform: uppercase;
    border-radius: 12px;
    padding: 4px 10px;
    letter-spacing: 0.06em;
    background-color: var(--primary-color);
    color: var(--primary-text-color);
  }
  .uet-status.overdue {
    background-color: var(--error-color);
    color: var(--text-primary-color, #fff);
  }
  .uet-bill {
    border: 1px solid var(--divider-color, rgba(0, 0, 0, 0.12));
    border-radius: 10px;
    padding: 12px 16px;
    display: flex;
    flex-direction: column;
    gap: 12px;
  }
  .uet-bill + .uet-bill {
    margin-top: 8px;
  }
  .uet-bill-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
  }
  .uet-bill-provider {
    font-size: 1.05rem;
    font-weight: 600;
  }
  .uet-data {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
    gap: 12px 16px;
  }
  .uet-details {
    border-top: 1px dashed var(--divider-color, rgba(0, 0, 0, 0.12));
    padding-top: 8px;
  }
  .uet-label {
    font-size: 0.7rem;
    font-weight: 600;
    text-transform: uppercase;
    color: var(--uet-label-color);
  }
  .uet-value {
    font-size: 1rem;
    word-break: break-word;
  }
  .uet-empty {
    padding: 16px;
    text-align: center;
    color: var(--secondary-text-color);
  }
"#;

pub const EDITOR_STYLE: &str = r#"
  .uet-editor {
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 8px;
  }
  .uet-field {
    display: flex;
    flex-direction: column;
    gap: 6px;
  }
  .uet-label {
    font-weight: 600;
    font-size: 0.9rem;
  }
  .uet-description {
    color: var(--secondary-text-color);
    font-size: 0.8rem;
  }
  .uet-checkboxes {
    display: flex;
    flex-wrap: wrap;
    gap: 8px 16px;
  }
  .uet-checkbox {
    display: flex;
    align-items: center;
    gap: 6px;
  }
"#;
