//! Sample snippets per language
//!
//! Used as starting points for conversions and as realistic input for tests.

use crate::Language;

/// A named sample snippet
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub language: Language,
    pub code: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        name: "API Fetch",
        language: Language::JavaScript,
        code: r#"// Fetch data from an API
async function fetchData(url) {
  try {
    const response = await fetch(url);
    const data = await response.json();
    console.log('Data received:', data);
    return data;
  } catch (error) {
    console.error('Error:', error);
  }
}

fetchData('https://api.example.com/data');"#,
    },
    Template {
        name: "Array Methods",
        language: Language::JavaScript,
        code: r#"// Array operations
const numbers = [1, 2, 3, 4, 5];

// Map - transform each element
const doubled = numbers.map(n => n * 2);
console.log('Doubled:', doubled);

// Filter
const even = numbers.filter(n => n % 2 === 0);
console.log('Even numbers:', even);

// Reduce - total
const sum = numbers.reduce((acc, n) => acc + n, 0);
console.log(`Total: ${sum}`);"#,
    },
    Template {
        name: "Async/Await",
        language: Language::JavaScript,
        code: r#"// Using async/await
const delay = (ms) => new Promise(resolve => setTimeout(resolve, ms));

async function processSteps() {
  console.log('Starting...');

  await delay(1000);
  console.log('Step 1 done');

  await delay(1000);
  console.log('Step 2 done');

  return 'All steps done!';
}

processSteps().then(console.log);"#,
    },
    Template {
        name: "DOM Manipulation",
        language: Language::JavaScript,
        code: r#"// DOM manipulation
const container = document.getElementById('app');

const button = document.createElement('button');
button.textContent = 'Click me';
button.className = 'btn btn-primary';

button.addEventListener('click', () => {
  alert('Button clicked!');
});

container.appendChild(button);"#,
    },
    Template {
        name: "LocalStorage",
        language: Language::JavaScript,
        code: r#"// Using localStorage
const userData = {
  name: 'Ada',
  theme: 'dark',
  lastVisit: new Date().toISOString()
};

// Save
localStorage.setItem('userData', JSON.stringify(userData));

// Load
const saved = JSON.parse(localStorage.getItem('userData'));
console.log('Saved data:', saved);

// Remove
// localStorage.removeItem('userData');"#,
    },
    Template {
        name: "API Request",
        language: Language::Python,
        code: r#"# Fetch data from an API
import requests

def fetch_data(url):
    try:
        response = requests.get(url)
        response.raise_for_status()
        data = response.json()
        print(f"Data received: {data}")
        return data
    except requests.RequestException as e:
        print(f"Error: {e}")
        return None

fetch_data("https://api.example.com/data")"#,
    },
    Template {
        name: "List Comprehension",
        language: Language::Python,
        code: r#"# List operations
numbers = [1, 2, 3, 4, 5]

# Transform each element
doubled = [n * 2 for n in numbers]
print(f"Doubled: {doubled}")

for n in range(len(numbers)):
    if numbers[n] % 2 == 0:
        print(f"{n} is even")
    elif numbers[n] > 3:
        print("big")
    else:
        print("odd")"#,
    },
    Template {
        name: "Class Definition",
        language: Language::Python,
        code: r#"# Class definition
class User:
    def __init__(self, name, email):
        self.name = name
        self.email = email
        self.active = True

    def greet(self):
        return f"Hello, I am {self.name}!"

# Usage
user = User("Ada", "ada@example.com")
print(user.greet())"#,
    },
    Template {
        name: "Async/Await",
        language: Language::Python,
        code: r#"# Using async/await
import asyncio

async def delay(seconds):
    await asyncio.sleep(seconds)

async def process_steps():
    print("Starting...")

    await delay(1)
    print("Step 1 done")

    await delay(1)
    print("Step 2 done")

    return "All steps done!"

result = asyncio.run(process_steps())
print(result)"#,
    },
    Template {
        name: "File Operations",
        language: Language::Python,
        code: r#"# File operations
import json

data = {"name": "Ada", "age": 36, "city": "London"}

# Write to a file
with open("data.json", "w", encoding="utf-8") as f:
    json.dump(data, f, ensure_ascii=False, indent=2)

# Read from a file
with open("data.json", "r", encoding="utf-8") as f:
    loaded = json.load(f)
    print(f"Loaded data: {loaded}")"#,
    },
    Template {
        name: "Stream API",
        language: Language::Java,
        code: r#"// Using the Stream API
import java.util.*;
import java.util.stream.*;

public class StreamExample {
    public static void main(String[] args) {
        List<Integer> numbers = Arrays.asList(1, 2, 3, 4, 5);

        // Map - transform each element
        List<Integer> doubled = numbers.stream().map(n -> n * 2).collect(Collectors.toList());
        System.out.println("Doubled: " + doubled);

        // Filter
        List<Integer> even = numbers.stream().filter(n -> n % 2 == 0).collect(Collectors.toList());
        System.out.println("Even numbers: " + even.size());
    }
}"#,
    },
    Template {
        name: "Class Definition",
        language: Language::Java,
        code: r#"// Class definition
public class User {
    private String name;
    private String email;

    public String getInfo() {
        return String.format("%s (%s)", name, email);
    }

    public String greet() {
        return "Hello, I am " + name + "!";
    }

    public static void main(String[] args) {
        User user = new User("Ada", "ada@example.com");
        System.out.println(user.greet());
    }
}"#,
    },
    Template {
        name: "Thread Example",
        language: Language::Java,
        code: r#"// Using threads
import java.util.concurrent.*;

public class ThreadExample {
    public static void main(String[] args) {
        ExecutorService executor = Executors.newFixedThreadPool(3);

        for (int i = 1; i <= 5; i++) {
            final int taskId = i;
            executor.submit(() -> {
                System.out.println("Task " + taskId + " started");
                try {
                    Thread.sleep(1000);
                } catch (InterruptedException e) {
                    Thread.currentThread().interrupt();
                }
            });
        }

        executor.shutdown();
    }
}"#,
    },
    Template {
        name: "HTTP Request",
        language: Language::Java,
        code: r#"// HTTP request
import java.net.http.*;
import java.net.URI;

public class ApiClient {
    public static void fetchData(String url) {
        HttpClient client = HttpClient.newHttpClient();
        HttpRequest request = HttpRequest.newBuilder()
            .uri(URI.create(url))
            .build();

        try {
            HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());
            System.out.println("Response: " + response.body());
        } catch (Exception e) {
            System.err.println("Error: " + e.getMessage());
        }
    }

    public static void main(String[] args) {
        fetchData("https://api.example.com/data");
    }
}"#,
    },
    Template {
        name: "File Operations",
        language: Language::Java,
        code: r#"// File operations
import java.io.*;
import java.nio.file.*;

public class FileExample {
    public static void main(String[] args) {
        String filename = "data.txt";

        // Write to a file
        try {
            Files.writeString(Path.of(filename), "Hello World!\nSecond line");
            System.out.println("File written");
        } catch (IOException e) {
            System.err.println("Write error: " + e.getMessage());
        }

        // Read from a file
        try {
            String content = Files.readString(Path.of(filename));
            System.out.println("File content: " + content);
        } catch (IOException e) {
            System.err.println("Read error: " + e.getMessage());
        }
    }
}"#,
    },
];

/// All built-in templates
pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Templates written in the given language
pub fn for_language(language: Language) -> impl Iterator<Item = &'static Template> {
    TEMPLATES.iter().filter(move |t| t.language == language)
}

/// Look up a template by language and name (case-insensitive)
pub fn find(language: Language, name: &str) -> Option<&'static Template> {
    for_language(language).find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_templates() {
        for lang in Language::ALL {
            assert!(for_language(lang).count() >= 3, "{} has too few templates", lang);
        }
    }

    #[test]
    fn test_five_templates_per_language() {
        assert_eq!(all().len(), 15);
        for lang in Language::ALL {
            assert_eq!(for_language(lang).count(), 5, "{}", lang);
        }
        assert!(find(Language::Python, "file operations").is_some());
        assert!(find(Language::Java, "HTTP Request").is_some());
        assert!(find(Language::JavaScript, "LocalStorage").is_some());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let t = find(Language::JavaScript, "array methods").unwrap();
        assert_eq!(t.name, "Array Methods");
        assert!(find(Language::Python, "Array Methods").is_none());
    }

    #[test]
    fn test_same_name_in_two_languages() {
        assert_eq!(find(Language::Python, "Class Definition").unwrap().language, Language::Python);
        assert_eq!(find(Language::Java, "Class Definition").unwrap().language, Language::Java);
    }
}
