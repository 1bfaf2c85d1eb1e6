//! Files every fresh session starts with.

use crate::models::FileRecord;

pub const HELLO_JS_NAME: &str = "Hello World.js";
pub const HELLO_PY_NAME: &str = "Hello World.py";
pub const HOME_JSX_NAME: &str = "Home.jsx";

const HELLO_JS: &str = "// This program prints Hello, world in JS in the console \n\n console.log(\"Hello World\")";

const HELLO_PY: &str = "# This program prints Hello, world in python!\n\nprint('Hello, world!')";

const HOME_JSX: &str = r#"import { useState } from 'react'

export default function Home() {
  const [count, setCount] = useState(0)

  return (
    <div>
      <h1>Hello from Home.jsx</h1>
      <button onClick={() => setCount(count + 1)}>
        Clicked {count} times
      </button>
    </div>
  )
}
"#;

pub fn sample_files() -> Vec<FileRecord> {
    vec![
        FileRecord::with_content(HELLO_JS_NAME, HELLO_JS),
        FileRecord::with_content(HELLO_PY_NAME, HELLO_PY),
        FileRecord::with_content(HOME_JSX_NAME, HOME_JSX),
    ]
}
