pub const CHECK_ELEMENT_STATE: &str = r#"
(kind, value) => {
    const find = () => {
        switch (kind) {
            case 'css':
                return document.querySelector(value);
            case 'id':
                return document.getElementById(value);
            case 'link-text': {
                const links = Array.from(document.querySelectorAll('a'));
                return links.find(a => a.textContent.trim() === value) || null;
            }
            case 'xpath':
                return document.evaluate(
                    value, document, null,
                    XPathResult.FIRST_ORDERED_NODE_TYPE, null
                ).singleNodeValue;
            default:
                return null;
        }
    };

    const el = find();
    if (!el) return { exists: false, visible: false, disabled: false };

    const rect = el.getBoundingClientRect();
    const style = window.getComputedStyle(el);
    const visible = rect.width > 0 && rect.height > 0 &&
                    style.visibility !== 'hidden' && style.display !== 'none';

    return {
        exists: true,
        visible,
        disabled: !!el.disabled || el.getAttribute('aria-disabled') === 'true',
        actualTag: el.tagName
    };
}
"#;

pub const CLICK_ELEMENT: &str = r#"
(kind, value) => {
    const find = () => {
        switch (kind) {
            case 'css':
                return document.querySelector(value);
            case 'id':
                return document.getElementById(value);
            case 'link-text': {
                const links = Array.from(document.querySelectorAll('a'));
                return links.find(a => a.textContent.trim() === value) || null;
            }
            case 'xpath':
                return document.evaluate(
                    value, document, null,
                    XPathResult.FIRST_ORDERED_NODE_TYPE, null
                ).singleNodeValue;
            default:
                return null;
        }
    };

    const el = find();
    if (!el) return { success: false, error: 'Element not found' };
    el.click();
    return { success: true };
}
"#;
