//! 명명 규칙

/// 클래스 이름에서 기본 테이블/컬럼 이름을 만드는 규칙
pub trait Naming: Send + Sync {
    fn tableize(&self, class_name: &str) -> String;
}

/// 기본 규칙: 단어 문자 뒤의 대문자 앞에 `_`를 넣고 소문자로 바꾼다
///
/// `BlogPost` → `blog_post`, `User` → `user`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl Naming for DefaultNaming {
    fn tableize(&self, class_name: &str) -> String {
        let mut out = String::with_capacity(class_name.len() + 4);
        let mut prev: Option<char> = None;

        for ch in class_name.chars() {
            let after_word = prev.is_some_and(|p| p.is_ascii_alphanumeric() || p == '_');
            if ch.is_ascii_uppercase() && after_word {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev = Some(ch);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tableize() {
        let naming = DefaultNaming;

        assert_eq!(naming.tableize("User"), "user");
        assert_eq!(naming.tableize("BlogPost"), "blog_post");
        assert_eq!(naming.tableize("ArticleTag"), "article_tag");
        assert_eq!(naming.tableize("already_snake"), "already_snake");
        assert_eq!(naming.tableize("HTMLPage"), "h_t_m_l_page");
    }
}
