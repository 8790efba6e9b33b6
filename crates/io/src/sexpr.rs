//! S-expression serializer and parser for Symmetrica expressions.
//! Formats:
//! - Atoms: (Int k), (Rat n d), (Sym name)
//! - Composite: (+ e1 e2 ...), (* e1 e2 ...), (^ base exp), (Fn name arg1 arg2 ...)
//!
//! Parser is minimal and conservative; it expects the above structured forms.
//! Names in (Sym name) and (Fn name ...) accept bare tokens without spaces/parentheses; use
//! double quotes to include spaces or special characters.

use expr_core::{ExprId, Op, Payload, Store};

/// Convert an expression to an S-expression string.
pub fn to_sexpr(st: &Store, id: ExprId) -> String {
    fn esc_name(s: &str) -> String {
        if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            s.to_string()
        } else {
            let escaped = s.replace('"', "\\\"");
            format!("\"{}\"", escaped)
        }
    }
    fn go(st: &Store, id: ExprId) -> String {
        let n = st.get(id);
        match (&n.op, &n.payload) {
            (Op::Integer, Payload::Int(k)) => format!("(Int {k})"),
            (Op::Rational, Payload::Rat(a, b)) => format!("(Rat {a} {b})"),
            (Op::Symbol, Payload::Sym(name)) => format!("(Sym {})", esc_name(name)),
            (Op::Function, Payload::Func(name)) => {
                let args = n.children.iter().map(|c| go(st, *c)).collect::<Vec<_>>().join(" ");
                format!("(Fn {} {})", esc_name(name), args)
            }
            (Op::Add, _) => {
                let parts = n.children.iter().map(|c| go(st, *c)).collect::<Vec<_>>().join(" ");
                format!("(+ {})", parts)
            }
            (Op::Mul, _) => {
                let parts = n.children.iter().map(|c| go(st, *c)).collect::<Vec<_>>().join(" ");
                format!("(* {})", parts)
            }
            (Op::Pow, _) => {
                let b = go(st, n.children[0]);
                let e = go(st, n.children[1]);
                format!("(^ {} {})", b, e)
            }
            _ => "(Unknown)".into(),
        }
    }
    go(st, id)
}

/// Parse an S-expression string into an expression in the provided Store.
pub fn from_sexpr(st: &mut Store, input: &str) -> Result<ExprId, String> {
    #[derive(Debug, Clone)]
    enum Tok {
        LParen,
        RParen,
        Str(String),
        Sym(String),
        Int(i64),
    }
    struct Lexer<'a> {
        s: &'a [u8],
        i: usize,
    }
    impl<'a> Lexer<'a> {
        fn new(s: &'a str) -> Self {
            Self { s: s.as_bytes(), i: 0 }
        }
        fn peek(&self) -> Option<u8> {
            self.s.get(self.i).copied()
        }
        fn bump(&mut self) {
            self.i += 1;
        }
        fn skip_ws(&mut self) {
            while let Some(c) = self.peek() {
                if c.is_ascii_whitespace() {
                    self.bump();
                } else {
                    break;
                }
            }
        }
        fn read_while<F: Fn(u8) -> bool>(&mut self, f: F) -> String {
            let start = self.i;
            while let Some(c) = self.peek() {
                if f(c) {
                    self.bump();
                } else {
                    break;
                }
            }
            String::from_utf8(self.s[start..self.i].to_vec()).unwrap()
        }
        fn read_string(&mut self) -> Result<String, String> {
            // assumes current is '"'
            self.bump();
            let mut out = String::new();
            while let Some(c) = self.peek() {
                self.bump();
                match c {
                    b'\\' => {
                        if let Some(nc) = self.peek() {
                            self.bump();
                            out.push(nc as char);
                        } else {
                            return Err("unterminated escape".into());
                        }
                    }
                    b'"' => return Ok(out),
                    _ => out.push(c as char),
                }
            }
            Err("unterminated string".into())
        }
        fn next_tok(&mut self) -> Result<Option<Tok>, String> {
            self.skip_ws();
            match self.peek() {
                None => Ok(None),
                Some(b'(') => {
                    self.bump();
                    Ok(Some(Tok::LParen))
                }
                Some(b')') => {
                    self.bump();
                    Ok(Some(Tok::RParen))
                }
                Some(b'"') => Ok(Some(Tok::Str(self.read_string()?))),
                Some(c) if c == b'-' || c.is_ascii_digit() => {
                    let s = self.read_while(|ch| ch == b'-' || ch.is_ascii_digit());
                    let k: i64 = s.parse().map_err(|_| format!("invalid int: {s}"))?;
                    Ok(Some(Tok::Int(k)))
                }
                Some(_) => {
                    let s =
                        self.read_while(|ch| !ch.is_ascii_whitespace() && ch != b'(' && ch != b')');
                    Ok(Some(Tok::Sym(s)))
                }
            }
        }
        fn all(mut self) -> Result<Vec<Tok>, String> {
            let mut v = Vec::new();
            while let Some(t) = self.next_tok()? {
                v.push(t);
            }
            Ok(v)
        }
    }

    #[derive(Clone)]
    struct Cursor {
        toks: Vec<Tok>,
        i: usize,
    }
    impl Cursor {
        fn new(toks: Vec<Tok>) -> Self {
            Self { toks, i: 0 }
        }
        fn peek(&self) -> Option<&Tok> {
            self.toks.get(self.i)
        }
        fn bump(&mut self) {
            self.i += 1;
        }
        fn expect_sym(&mut self) -> Result<String, String> {
            match self.peek() {
                Some(Tok::Sym(s)) => {
                    let out = s.clone();
                    self.bump();
                    Ok(out)
                }
                Some(Tok::Str(s)) => {
                    let out = s.clone();
                    self.bump();
                    Ok(out)
                }
                _ => Err("expected symbol or string".into()),
            }
        }
        fn expect_int(&mut self) -> Result<i64, String> {
            match self.peek() {
                Some(Tok::Int(k)) => {
                    let v = *k;
                    self.bump();
                    Ok(v)
                }
                _ => Err("expected integer".into()),
            }
        }
        fn expect(&mut self, want: &Tok) -> Result<(), String> {
            match (self.peek(), want) {
                (Some(Tok::LParen), Tok::LParen) => {
                    self.bump();
                    Ok(())
                }
                (Some(Tok::RParen), Tok::RParen) => {
                    self.bump();
                    Ok(())
                }
                _ => Err("unexpected token".into()),
            }
        }
    }

    fn parse_list(st: &mut Store, cur: &mut Cursor) -> Result<ExprId, String> {
        cur.expect(&Tok::LParen)?;
        // head
        let head = cur.expect_sym()?;
        let out = match head.as_str() {
            "+" => {
                let mut terms: Vec<ExprId> = Vec::new();
                while !matches!(cur.peek(), Some(Tok::RParen)) {
                    terms.push(parse_any(st, cur)?);
                }
                st.add(terms)
            }
            "*" => {
                let mut facs: Vec<ExprId> = Vec::new();
                while !matches!(cur.peek(), Some(Tok::RParen)) {
                    facs.push(parse_any(st, cur)?);
                }
                st.mul(facs)
            }
            "^" => {
                let b = parse_any(st, cur)?;
                let e = parse_any(st, cur)?;
                st.pow(b, e)
            }
            "Int" => {
                let k = cur.expect_int()?;
                st.int(k)
            }
            "Rat" => {
                let n = cur.expect_int()?;
                let d = cur.expect_int()?;
                st.rat(n, d)
            }
            "Sym" => {
                let name = cur.expect_sym()?;
                st.sym(name)
            }
            "Fn" => {
                let name = cur.expect_sym()?;
                let mut args: Vec<ExprId> = Vec::new();
                while !matches!(cur.peek(), Some(Tok::RParen)) {
                    args.push(parse_any(st, cur)?);
                }
                st.func(name, args)
            }
            _ => return Err(format!("unknown head: {head}")),
        };
        cur.expect(&Tok::RParen)?;
        Ok(out)
    }

    fn parse_any(st: &mut Store, cur: &mut Cursor) -> Result<ExprId, String> {
        match cur.peek() {
            Some(Tok::LParen) => parse_list(st, cur),
            Some(Tok::Int(k)) => {
                let v = *k;
                cur.bump();
                Ok(st.int(v))
            }
            Some(Tok::Sym(s)) => {
                // bare symbol token: interpret as (Sym s)
                let name = s.clone();
                cur.bump();
                Ok(st.sym(name))
            }
            Some(Tok::Str(s)) => {
                let name = s.clone();
                cur.bump();
                Ok(st.sym(name))
            }
            _ => Err("unexpected token while parsing".into()),
        }
    }

    let toks = Lexer::new(input).all()?;
    let mut cur = Cursor::new(toks);
    let id = parse_any(st, &mut cur)?;
    if cur.peek().is_some() {
        return Err("trailing tokens".into());
    }
    Ok(id)
}
