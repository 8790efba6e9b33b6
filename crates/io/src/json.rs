//! JSON serializer for Symmetrica expressions (no external deps).
//! Format is stable and minimal:
//! - Integer: {"Integer": k}
//! - Rational: {"Rational": {"num": n, "den": d}}
//! - Symbol: {"Symbol": "name"}
//! - Function: {"Function": {"name": "f", "args": [ ... ]}}
//! - Add: {"Add": [ ... ]}
//! - Mul: {"Mul": [ ... ]}
//! - Pow: {"Pow": {"base": ..., "exp": ...}}

use expr_core::{ExprId, Op, Payload, Store};

/// Serialize an expression to the stable JSON format described above.
pub fn to_json(st: &Store, id: ExprId) -> String {
    fn esc(s: &str) -> String {
        // Minimal string escape for JSON: quotes and backslashes
        s.replace('\\', "\\\\").replace('"', "\\\"")
    }
    fn go(st: &Store, id: ExprId) -> String {
        let n = st.get(id);
        match (&n.op, &n.payload) {
            (Op::Integer, Payload::Int(k)) => format!("{{\"Integer\": {k}}}"),
            (Op::Rational, Payload::Rat(a, b)) => {
                format!("{{\"Rational\": {{\"num\": {a}, \"den\": {b}}}}}")
            }
            (Op::Symbol, Payload::Sym(name)) => format!("{{\"Symbol\": \"{}\"}}", esc(name)),
            (Op::Function, Payload::Func(name)) => {
                let args = n.children.iter().map(|c| go(st, *c)).collect::<Vec<_>>().join(", ");
                format!("{{\"Function\": {{\"name\": \"{}\", \"args\": [{}]}}}}", esc(name), args)
            }
            (Op::Add, _) => {
                let parts = n.children.iter().map(|c| go(st, *c)).collect::<Vec<_>>().join(", ");
                format!("{{\"Add\": [{}]}}", parts)
            }
            (Op::Mul, _) => {
                let parts = n.children.iter().map(|c| go(st, *c)).collect::<Vec<_>>().join(", ");
                format!("{{\"Mul\": [{}]}}", parts)
            }
            (Op::Pow, _) => {
                let b = go(st, n.children[0]);
                let e = go(st, n.children[1]);
                format!("{{\"Pow\": {{\"base\": {b}, \"exp\": {e}}}}}")
            }
            _ => "{\"Unknown\": null}".into(),
        }
    }
    go(st, id)
}

/// Parse an expression from the stable JSON format produced by `to_json()`.
pub fn from_json(st: &mut Store, input: &str) -> Result<ExprId, String> {
    #[derive(Clone, Debug, PartialEq)]
    enum J {
        Obj(Vec<(String, J)>),
        Arr(Vec<J>),
        Str(String),
        Num(i64),
        Null,
    }
    struct P<'a> {
        s: &'a [u8],
        i: usize,
    }
    impl<'a> P<'a> {
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
        fn expect(&mut self, b: u8) -> Result<(), String> {
            self.skip_ws();
            if self.peek() == Some(b) {
                self.bump();
                Ok(())
            } else {
                Err(format!("expected '{}'", b as char))
            }
        }
        fn parse_str(&mut self) -> Result<String, String> {
            self.skip_ws();
            if self.peek() != Some(b'"') {
                return Err("expected string".into());
            }
            self.bump();
            let mut out = String::new();
            while let Some(c) = self.peek() {
                self.bump();
                match c {
                    b'"' => return Ok(out),
                    b'\\' => {
                        if let Some(nc) = self.peek() {
                            self.bump();
                            out.push(nc as char);
                        } else {
                            return Err("unterminated escape".into());
                        }
                    }
                    _ => out.push(c as char),
                }
            }
            Err("unterminated string".into())
        }
        fn parse_num(&mut self) -> Result<i64, String> {
            self.skip_ws();
            let start = self.i;
            if self.peek() == Some(b'-') {
                self.bump();
            }
            let mut saw = false;
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    self.bump();
                    saw = true;
                } else {
                    break;
                }
            }
            if !saw {
                return Err("expected integer".into());
            }
            let s = std::str::from_utf8(&self.s[start..self.i]).unwrap();
            s.parse::<i64>().map_err(|_| "invalid integer".into())
        }
        fn parse_value(&mut self) -> Result<J, String> {
            self.skip_ws();
            match self.peek() {
                Some(b'{') => {
                    self.bump();
                    let mut fields = Vec::new();
                    self.skip_ws();
                    if self.peek() == Some(b'}') {
                        self.bump();
                        return Ok(J::Obj(fields));
                    }
                    loop {
                        let k = self.parse_str()?;
                        self.skip_ws();
                        self.expect(b':')?;
                        let v = self.parse_value()?;
                        fields.push((k, v));
                        self.skip_ws();
                        match self.peek() {
                            Some(b',') => {
                                self.bump();
                            }
                            Some(b'}') => {
                                self.bump();
                                break;
                            }
                            _ => return Err("expected ',' or '}'".into()),
                        }
                    }
                    Ok(J::Obj(fields))
                }
                Some(b'[') => {
                    self.bump();
                    let mut items = Vec::new();
                    self.skip_ws();
                    if self.peek() == Some(b']') {
                        self.bump();
                        return Ok(J::Arr(items));
                    }
                    loop {
                        let v = self.parse_value()?;
                        items.push(v);
                        self.skip_ws();
                        match self.peek() {
                            Some(b',') => {
                                self.bump();
                            }
                            Some(b']') => {
                                self.bump();
                                break;
                            }
                            _ => return Err("expected ',' or ']'".into()),
                        }
                    }
                    Ok(J::Arr(items))
                }
                Some(b'"') => Ok(J::Str(self.parse_str()?)),
                Some(c) if c == b'-' || c.is_ascii_digit() => Ok(J::Num(self.parse_num()?)),
                _ => Err("unexpected token".into()),
            }
        }
    }

    fn build_expr(st: &mut Store, v: J) -> Result<ExprId, String> {
        match v {
            J::Obj(mut fields) => {
                // We expect a single top-level key
                if fields.len() != 1 {
                    return Err("expected single-key object".into());
                }
                let (k, v) = fields.remove(0);
                match k.as_str() {
                    "Integer" => match v {
                        J::Num(k) => Ok(st.int(k)),
                        _ => Err("Integer expects number".into()),
                    },
                    "Rational" => match v {
                        J::Obj(mut f2) => {
                            let mut n = None;
                            let mut d = None;
                            for (kk, vv) in f2.drain(..) {
                                match kk.as_str() {
                                    "num" => {
                                        if let J::Num(x) = vv {
                                            n = Some(x)
                                        } else {
                                            return Err("num must be number".into());
                                        }
                                    }
                                    "den" => {
                                        if let J::Num(x) = vv {
                                            d = Some(x)
                                        } else {
                                            return Err("den must be number".into());
                                        }
                                    }
                                    _ => {}
                                }
                            }
                            let (nn, dd) = (n.ok_or("missing num")?, d.ok_or("missing den")?);
                            Ok(st.rat(nn, dd))
                        }
                        _ => Err("Rational expects object".into()),
                    },
                    "Symbol" => match v {
                        J::Str(s) => Ok(st.sym(s)),
                        _ => Err("Symbol expects string".into()),
                    },
                    "Function" => match v {
                        J::Obj(mut f2) => {
                            let mut name = None;
                            let mut args = None;
                            for (kk, vv) in f2.drain(..) {
                                match kk.as_str() {
                                    "name" => {
                                        if let J::Str(s) = vv {
                                            name = Some(s)
                                        } else {
                                            return Err("name must be string".into());
                                        }
                                    }
                                    "args" => {
                                        if let J::Arr(a) = vv {
                                            args = Some(a)
                                        } else {
                                            return Err("args must be array".into());
                                        }
                                    }
                                    _ => {}
                                }
                            }
                            let nm = name.ok_or("missing name")?;
                            let aitems = args.ok_or("missing args")?;
                            let mut ch: Vec<ExprId> = Vec::with_capacity(aitems.len());
                            for it in aitems {
                                ch.push(build_expr(st, it)?);
                            }
                            Ok(st.func(nm, ch))
                        }
                        _ => Err("Function expects object".into()),
                    },
                    "Add" => match v {
                        J::Arr(items) => {
                            let mut ch = Vec::with_capacity(items.len());
                            for it in items {
                                ch.push(build_expr(st, it)?);
                            }
                            Ok(st.add(ch))
                        }
                        _ => Err("Add expects array".into()),
                    },
                    "Mul" => match v {
                        J::Arr(items) => {
                            let mut ch = Vec::with_capacity(items.len());
                            for it in items {
                                ch.push(build_expr(st, it)?);
                            }
                            Ok(st.mul(ch))
                        }
                        _ => Err("Mul expects array".into()),
                    },
                    "Pow" => match v {
                        J::Obj(mut f2) => {
                            let mut base = None;
                            let mut exp = None;
                            for (kk, vv) in f2.drain(..) {
                                match kk.as_str() {
                                    "base" => base = Some(vv),
                                    "exp" => exp = Some(vv),
                                    _ => {}
                                }
                            }
                            let b = build_expr(st, base.ok_or("missing base")?)?;
                            let e = build_expr(st, exp.ok_or("missing exp")?)?;
                            Ok(st.pow(b, e))
                        }
                        _ => Err("Pow expects object".into()),
                    },
                    _ => Err("unknown head".into()),
                }
            }
            _ => Err("expected object".into()),
        }
    }

    let mut p = P::new(input);
    let v = p.parse_value()?;
    build_expr(st, v)
}
