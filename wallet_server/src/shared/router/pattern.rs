// Path pattern matcher
// 경로 패턴 매칭
//
// 템플릿 예시:
//   "/"           → 세그먼트 없음 (루트만 매칭)
//   "/:username"  → 파라미터 1개 (비어있지 않은 세그먼트 하나)
//   "/a/:id/b"    → 리터럴 + 파라미터 혼합

use thiserror::Error;

/// 패턴 파싱 에러
/// Route template parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Route template must start with '/': {template}")]
    MissingLeadingSlash { template: String },

    #[error("Route template has an empty segment: {template}")]
    EmptySegment { template: String },

    #[error("Route parameter has no name: {template}")]
    UnnamedParameter { template: String },

    #[error("Route parameter '{name}' is declared twice: {template}")]
    DuplicateParameter { template: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// 경로 템플릿
/// Parsed path template. Matching is anchored at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// 템플릿 파싱
    /// Parse a template such as `/:username`
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        let rest = template
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash {
                template: template.to_string(),
            })?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment {
                        template: template.to_string(),
                    });
                }

                match raw.strip_prefix(':') {
                    Some("") => {
                        return Err(PatternError::UnnamedParameter {
                            template: template.to_string(),
                        });
                    }
                    Some(name) => {
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(PatternError::DuplicateParameter {
                                template: template.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(raw.to_string())),
                }
            }
        }

        Ok(Self { segments })
    }

    /// 경로 매칭 (전체 일치만 허용)
    /// Match the full path, returning captured parameters in template order.
    ///
    /// 접두사 매칭 없음: "/amy/" 나 "/amy/x" 는 "/:username" 과 매칭되지 않음
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;

        if self.segments.is_empty() {
            return rest.is_empty().then(PathParams::default);
        }

        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    // 잘못된 UTF-8 인코딩은 매칭 실패로 처리
                    let value = urlencoding::decode(part).ok()?;
                    // 파라미터는 세그먼트 하나: 디코딩 후에도 '/' 불가
                    if value.contains('/') {
                        return None;
                    }
                    params.push(name.clone(), value.into_owned());
                }
            }
        }

        Some(params)
    }
}

/// 추출된 경로 파라미터 (순서 유지)
/// Captured path parameters, addressable by position or by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: Vec<(String, String)>,
}

impl PathParams {
    fn push(&mut self, name: String, value: String) {
        self.values.push((name, value));
    }

    /// 위치로 조회
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(|(_, value)| value.as_str())
    }

    /// 이름으로 조회
    pub fn named(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
